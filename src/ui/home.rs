//! Home page: hero, stats, tools and services

use super::widgets::{heading, paragraph, percent_bar, PERCENT_BAR_WIDTH};
use crate::app::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Build the home page lines wrapped to `width`
pub fn page_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let content = &app.state.content;
    let mut lines = vec![
        Line::from(Span::styled(
            content.greeting.clone(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("I'm "),
            Span::styled(
                content.owner.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    lines.extend(paragraph(&content.hero, width, Style::default()));
    lines.push(Line::from(""));
    lines.push(avatar_line(app));
    lines.push(Line::from(""));

    for stat in &content.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>5}  ", stat.number),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(stat.label.clone()),
        ]));
    }
    lines.push(Line::from(""));

    lines.extend(heading("Tools"));
    let bar_width = PERCENT_BAR_WIDTH.min(width.saturating_sub(24));
    for tool in &content.tools {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{:<3}] ", tool.badge()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("{:<10} ", tool.name)),
            Span::styled(
                percent_bar(&tool.percentage, bar_width),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw(format!(" {}", tool.percentage)),
        ]));
    }
    lines.push(Line::from(""));

    lines.extend(heading("What I Do"));
    for skill in &content.skills {
        lines.push(Line::from(Span::styled(
            skill.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(paragraph(
            &skill.description,
            width,
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(""));
    }

    if !content.marquee.is_empty() {
        lines.extend(paragraph(
            &content.marquee.join(" ✦ "),
            width,
            Style::default().fg(Color::Magenta),
        ));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Have a project in mind? Press Tab to write a message.",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

/// Placeholder for the profile picture; falls back to initials
fn avatar_line(app: &App) -> Line<'static> {
    let content = &app.state.content;
    if app.state.profile_image_available {
        Line::from(Span::styled(
            format!("◉ {} (profile photo)", content.owner),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        let initial: String = content.owner.chars().take(1).collect();
        Line::from(Span::styled(
            format!("( {initial} )"),
            Style::default().fg(Color::DarkGray),
        ))
    }
}
