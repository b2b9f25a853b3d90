//! Contact page: details and social links

use super::widgets::{heading, paragraph};
use crate::app::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Build the contact page lines wrapped to `width`
pub fn page_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let content = &app.state.content;
    let mut lines = heading("Let's Talk");
    lines.extend(paragraph(
        "Send a message with the form, or reach out directly.",
        width,
        Style::default().fg(Color::Gray),
    ));
    lines.push(Line::from(""));

    for detail in &content.contact {
        lines.push(Line::from(Span::styled(
            detail.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(paragraph(
            &detail.value,
            width,
            Style::default().fg(Color::Cyan),
        ));
        lines.push(Line::from(""));
    }

    if content.email().is_some() {
        lines.push(Line::from(Span::styled(
            "Press y to copy the email address.",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if !content.socials.is_empty() {
        lines.extend(heading("Follow Me"));
        for social in &content.socials {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", social.name), Style::default()),
                Span::styled(social.url.clone(), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    lines
}
