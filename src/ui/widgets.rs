//! Reusable UI widget helpers
//!
//! Pages are built as plain lines wrapped to the viewport width so the
//! app can compute how far a page may scroll.

use super::components::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the bar drawn next to a tool proficiency
pub const PERCENT_BAR_WIDTH: usize = 20;

/// Section heading followed by a blank line
pub fn heading(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("── {title} ──"),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// Word-wrapped text, one line per row
pub fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// Filled/empty bar for a value like `"85%"`; unparsable values render empty
pub fn percent_bar(percentage: &str, width: usize) -> String {
    let value: usize = percentage
        .trim()
        .trim_end_matches('%')
        .parse()
        .unwrap_or(0);
    let filled = (value.min(100) * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render page lines starting at the scroll offset
pub fn render_page(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, offset: usize) {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}
