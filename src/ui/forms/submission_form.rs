//! Submission form rendering
//!
//! The same controller state drives the contact panel and the footer
//! newsletter strip; only the layout differs.

use super::field_renderer::{draw_field, field_height};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Form, FormStatus, SubmissionController};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label of the submit button for the current status
fn submit_label(controller: &SubmissionController) -> &'static str {
    match controller.status() {
        FormStatus::Submitting => "Sending...",
        _ => controller.schema().submit_label,
    }
}

/// Key hints for a focused form
pub fn form_help_text() -> String {
    format!("Tab/S-Tab:field  Enter:submit  {SUBMIT_SHORTCUT}:send  Esc:leave form")
}

/// Draw the contact form panel
pub fn draw_contact_form(
    frame: &mut Frame,
    area: Rect,
    controller: &SubmissionController,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", controller.schema().title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if controller.status() == FormStatus::Submitted {
        draw_confirmation(frame, inner, controller);
        return;
    }

    let form = controller.form();
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let enabled = controller.is_input_enabled();
    for (idx, field) in form.fields.iter().enumerate() {
        let is_active = is_focused && form.active_field() == idx;
        draw_field(frame, chunks[idx], field, is_active, enabled);
    }

    let button_row = chunks[form.fields.len()];
    let button_area = Rect {
        width: button_row.width.min(16),
        ..button_row
    };
    render_button(
        frame,
        button_area,
        submit_label(controller),
        is_focused && form.is_submit_active(),
        controller.is_submit_enabled(),
    );
}

/// Confirmation shown in place of the fields after a successful send
fn draw_confirmation(frame: &mut Frame, area: Rect, controller: &SubmissionController) {
    let schema = controller.schema();
    let top_padding = area.height.saturating_sub(3) / 2;

    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        schema.success_title,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(schema.success_message));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Draw the footer newsletter strip (three rows high)
pub fn draw_newsletter(
    frame: &mut Frame,
    area: Rect,
    controller: &SubmissionController,
    is_focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Heading
            Constraint::Min(20),    // Email input
            Constraint::Length(14), // Button
        ])
        .split(area);

    let heading_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let heading = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", controller.schema().title),
            heading_style,
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    if controller.status() == FormStatus::Submitted {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                controller.schema().success_message,
                Style::default().fg(Color::Green),
            )),
        ]);
        let message_area = Rect {
            width: chunks[1].width + chunks[2].width,
            ..chunks[1]
        };
        frame.render_widget(message, message_area);
        return;
    }

    let form = controller.form();
    if let Some(field) = form.get_field(0) {
        draw_field(
            frame,
            chunks[1],
            field,
            is_focused && form.active_field() == 0,
            controller.is_input_enabled(),
        );
    }

    render_button(
        frame,
        chunks[2],
        submit_label(controller),
        is_focused && form.is_submit_active(),
        controller.is_submit_enabled(),
    );
}
