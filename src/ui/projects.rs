//! Projects page: category filter bar and project cards

use super::widgets::paragraph;
use crate::app::App;
use crate::state::{Project, PROJECT_FILTERS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the filter buttons; the active one is highlighted
pub fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.state.active_filter_index();
    let mut spans = Vec::new();

    for (idx, label) in PROJECT_FILTERS.iter().enumerate() {
        let style = if idx == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Build the project cards wrapped to `width`
pub fn page_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let projects = app.state.visible_projects();
    if projects.is_empty() {
        return vec![Line::from(Span::styled(
            "No projects in this category yet.",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    for project in projects {
        lines.extend(card_lines(project, width));
    }
    lines
}

fn card_lines(project: &Project, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        project.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    let tags: Vec<Span<'static>> = project
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("[{tag}]"), Style::default().fg(Color::Magenta)),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(tags));

    lines.extend(paragraph(&project.description, width, Style::default()));
    lines.push(Line::from(Span::styled(
        project.image_url.clone(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
