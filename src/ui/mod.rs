//! UI module for rendering the TUI

mod about;
mod components;
mod contact;
mod forms;
mod home;
mod layout;
mod projects;
mod widgets;

use crate::app::App;
use crate::state::{Focus, View};
use components::render_notice_dialog;
use ratatui::{layout::Rect, text::Line, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.state.current_view;
    let regions = layout::create_layout(area);

    layout::draw_header(frame, regions.header, app);

    let body = layout::split_body(regions.body, view);
    let lines = page_lines(app, body.page.width);
    widgets::render_page(frame, body.page, lines, app.state.nav.scroll_offset());

    if let Some(bar) = body.filter_bar {
        projects::draw_filter_bar(frame, bar, app);
    }
    if let (Some(side), Some(controller)) = (body.side, app.page_form.as_ref()) {
        forms::draw_contact_form(
            frame,
            side,
            controller,
            app.state.focus == Focus::PageForm,
        );
    }

    layout::draw_footer(frame, regions.footer, app);
    layout::draw_status_bar(frame, regions.status, app);

    if app.state.nav.menu_open {
        layout::draw_menu(frame, regions.body, app);
    }

    // Blocking notice on top of everything
    if let Some(notice) = app.state.front_notice() {
        render_notice_dialog(frame, notice, app.state.notices.len() - 1);
    }
}

/// Lines of the current page wrapped to `width`
fn page_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    match app.state.current_view {
        View::Home => home::page_lines(app, width),
        View::About => about::page_lines(app, width),
        View::Projects => projects::page_lines(app, width),
        View::Contact => contact::page_lines(app, width),
    }
}

/// Furthest the current page can scroll inside a terminal of `area`
pub fn max_scroll(app: &App, area: Rect) -> usize {
    let body = layout::split_body(layout::create_layout(area).body, app.state.current_view);
    let total = page_lines(app, body.page.width).len();
    total.saturating_sub(body.page.height as usize)
}
