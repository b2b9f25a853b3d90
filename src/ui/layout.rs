//! Layout components (header, menu, footer, status bar)

use super::forms::{draw_newsletter, form_help_text};
use crate::app::App;
use crate::state::{Focus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Rows reserved for the project filter bar
pub const FILTER_BAR_HEIGHT: u16 = 2;

/// Terminal width below which the header collapses into the menu
const NARROW_WIDTH: u16 = 72;

/// Top-level screen regions
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Regions inside the page body
pub struct BodyLayout {
    /// Scrollable page text
    pub page: Rect,
    /// Contact form panel on pages that embed one
    pub side: Option<Rect>,
    /// Project filter bar
    pub filter_bar: Option<Rect>,
}

/// Create the main layout
pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Page
            Constraint::Length(4), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Split the page body for `view`
pub fn split_body(body: Rect, view: View) -> BodyLayout {
    let (page, side) = if view.has_contact_form() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);
        (chunks[0], Some(chunks[1]))
    } else {
        (body, None)
    };

    let page = Block::default().padding(Padding::horizontal(2)).inner(page);

    let (page, filter_bar) = if view == View::Projects {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(0)])
            .split(page);
        (chunks[1], Some(chunks[0]))
    } else {
        (page, None)
    };

    BodyLayout {
        page,
        side,
        filter_bar,
    }
}

/// Draw the header; it gains a border and a solid background once scrolled
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let scrolled = app.state.nav.is_scrolled();

    let block = if scrolled {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black))
    } else {
        Block::default().padding(Padding::vertical(1))
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand_style = if scrolled {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!("{}.", app.state.content.owner), brand_style),
        Span::raw("   "),
    ];

    if area.width >= NARROW_WIDTH {
        for view in View::ALL {
            let is_active = view == app.state.current_view;
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(
                format!("{} ", view.shortcut()),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(view.label(), style));
            spans.push(Span::raw("  "));
        }
    } else {
        spans.push(Span::styled(
            format!("{} ", app.state.current_view.label()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let menu_glyph = if app.state.nav.menu_open { "✕" } else { "☰" };
    spans.push(Span::styled(
        format!("m {menu_glyph}"),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Draw the navigation menu overlay below the header
pub fn draw_menu(frame: &mut Frame, body: Rect, app: &App) {
    let width = 22u16.min(body.width);
    let height = (View::ALL.len() as u16 + 2).min(body.height);
    let area = Rect {
        x: body.x + body.width.saturating_sub(width),
        y: body.y,
        width,
        height,
    };

    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|view| {
            let style = if *view == app.state.current_view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", view.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(view.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

/// Draw the footer: newsletter signup and copyright line
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    draw_newsletter(
        frame,
        chunks[0],
        &app.newsletter,
        app.state.focus == Focus::Newsletter,
    );

    let socials: Vec<&str> = app
        .state
        .content
        .socials
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    let copyright = format!(
        " © {}. All rights reserved.  {}",
        app.state.content.owner,
        socials.join(" · ")
    );
    frame.render_widget(
        Paragraph::new(copyright).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = if app.state.has_notice() {
        "Enter/Esc:dismiss".to_string()
    } else if app.state.focus.is_form() {
        form_help_text()
    } else {
        get_view_hints(app.state.current_view).to_string()
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " q:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Home => "1-4:pages  j/k:scroll  Tab:contact form  n:newsletter  m:menu",
        View::About => "1-4:pages  j/k:scroll  n:newsletter  m:menu  Esc:back",
        View::Projects => "1-4:pages  ←/→:filter  j/k:scroll  n:newsletter  Esc:back",
        View::Contact => "1-4:pages  Tab:form  y:copy email  n:newsletter  Esc:back",
    }
}
