//! About page: bio, vision, mission and timelines

use super::widgets::{heading, paragraph};
use crate::app::App;
use crate::state::TimelineEntry;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Build the about page lines wrapped to `width`
pub fn page_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let content = &app.state.content;
    let mut lines = heading("About Me");
    lines.extend(paragraph(&content.bio, width, Style::default()));
    lines.push(Line::from(""));

    lines.extend(heading("My Vision"));
    lines.extend(paragraph(&content.vision, width, Style::default().fg(Color::Gray)));
    lines.push(Line::from(""));

    lines.extend(heading("My Mission"));
    lines.extend(paragraph(&content.mission, width, Style::default().fg(Color::Gray)));
    lines.push(Line::from(""));

    lines.extend(heading("Education"));
    lines.extend(timeline(&content.education, width));

    lines.extend(heading("Experience"));
    lines.extend(timeline(&content.experience, width));

    lines
}

fn timeline(entries: &[TimelineEntry], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Magenta)),
            Span::styled(entry.years.clone(), Style::default().fg(Color::Yellow)),
        ]));
        lines.extend(paragraph(
            &entry.title,
            width,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.extend(paragraph(
            &entry.subtitle,
            width,
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(""));
    }
    lines
}
