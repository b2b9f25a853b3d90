//! Application state and core logic

use crate::config::FolioConfig;
use crate::remote::{RemoteClient, RemoteClientTrait};
use crate::state::{
    AppState, Focus, FormSchema, FormStatus, SiteContent, SubmissionController, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Rows moved per mouse wheel notch
const WHEEL_SCROLL_ROWS: usize = 3;

/// Rows moved by PageUp/PageDown
const PAGE_SCROLL_ROWS: usize = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    config: FolioConfig,
    client: Arc<dyn RemoteClientTrait>,
    /// Contact form of the current page; rebuilt on every navigation
    pub page_form: Option<SubmissionController>,
    /// Page forms left behind mid-request; kept until their outcome arrives
    retired_forms: Vec<SubmissionController>,
    /// Footer newsletter signup, alive for the whole session
    pub newsletter: SubmissionController,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Terminal size for scroll calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    profile_check: Option<oneshot::Receiver<bool>>,
}

impl App {
    /// Create a new App instance from the user's config and content files
    pub fn new() -> Result<Self> {
        let config = FolioConfig::load()?;
        let content_path = FolioConfig::content_path();
        let content = SiteContent::load(content_path.as_deref())?;
        let client: Arc<dyn RemoteClientTrait> = Arc::new(RemoteClient::new());

        let mut app = Self::with_client(config, content, client);
        app.start_profile_check();
        Ok(app)
    }

    /// Build an app around an existing remote client
    pub fn with_client(
        config: FolioConfig,
        content: SiteContent,
        client: Arc<dyn RemoteClientTrait>,
    ) -> Self {
        let newsletter = SubmissionController::new(
            FormSchema::newsletter(config.newsletter_endpoint()),
            Arc::clone(&client),
        );

        let mut app = Self {
            state: AppState::new(content),
            config,
            client,
            page_form: None,
            retired_forms: Vec::new(),
            newsletter,
            quit: false,
            copy_message: None,
            terminal_size: None,
            profile_check: None,
        };
        app.page_form = app.build_page_form(app.state.current_view);
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn build_page_form(&self, view: View) -> Option<SubmissionController> {
        view.has_contact_form().then(|| {
            SubmissionController::new(
                FormSchema::contact(self.config.contact_endpoint()),
                Arc::clone(&self.client),
            )
        })
    }

    /// Check for the profile image once in the background
    fn start_profile_check(&mut self) {
        let Some(url) = self.config.profile_image_url.clone() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let found = client.asset_exists(&url).await;
            if !found {
                tracing::debug!("Profile image not available at {url}");
            }
            let _ = tx.send(found);
        });
        self.profile_check = Some(rx);
    }

    /// Apply finished background work: submissions, reverts and the image check.
    /// Called once per loop tick.
    pub fn poll_background(&mut self) {
        if let Some(form) = self.page_form.as_mut() {
            form.poll();
            if let Some(notice) = form.take_notice() {
                self.state.push_notice(notice);
            }
        }

        for form in &mut self.retired_forms {
            form.poll();
            if let Some(notice) = form.take_notice() {
                self.state.push_notice(notice);
            }
        }
        self.retired_forms
            .retain(|form| form.status() == FormStatus::Submitting);

        self.newsletter.poll();
        if let Some(notice) = self.newsletter.take_notice() {
            self.state.push_notice(notice);
        }

        // A form that just went through has nothing left to type into
        if self.focused_status() == Some(FormStatus::Submitted) {
            self.state.focus = Focus::Page;
        }

        if let Some(rx) = self.profile_check.as_mut() {
            match rx.try_recv() {
                Ok(found) => {
                    self.state.profile_image_available = found;
                    self.profile_check = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => self.profile_check = None,
            }
        }
    }

    fn focused_controller_mut(&mut self) -> Option<&mut SubmissionController> {
        match self.state.focus {
            Focus::Page => None,
            Focus::PageForm => self.page_form.as_mut(),
            Focus::Newsletter => Some(&mut self.newsletter),
        }
    }

    fn focused_status(&self) -> Option<FormStatus> {
        match self.state.focus {
            Focus::Page => None,
            Focus::PageForm => self.page_form.as_ref().map(SubmissionController::status),
            Focus::Newsletter => Some(self.newsletter.status()),
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;
        self.state.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        if self.state.focus.is_form() {
            self.handle_form_key(key);
        } else {
            self.handle_page_key(key)?;
        }
        Ok(())
    }

    /// Keys while the page itself has focus
    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => {
                if self.state.nav.menu_open {
                    self.state.nav.menu_open = false;
                } else {
                    self.go_back();
                }
            }
            KeyCode::Char('m') => self.state.nav.toggle_menu(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL_ROWS),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL_ROWS),
            KeyCode::Char('g') | KeyCode::Home => self.state.nav.set_scroll_offset(0),
            KeyCode::Tab => self.focus_page_form(),
            KeyCode::Char('n') => self.focus_newsletter(),
            KeyCode::Char('y') if self.state.current_view == View::Contact => {
                self.copy_email()?;
            }
            KeyCode::Right | KeyCode::Char(']') if self.state.current_view == View::Projects => {
                self.state.next_filter();
            }
            KeyCode::Left | KeyCode::Char('[') if self.state.current_view == View::Projects => {
                self.state.prev_filter();
            }
            KeyCode::Char(c) => {
                if let Some(view) = View::from_shortcut(c) {
                    self.navigate(view);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Keys while a form has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.focus = Focus::Page;
            return;
        }

        if self.focused_status().is_none() {
            self.state.focus = Focus::Page;
            return;
        }

        let submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::COPY_MODIFIER));
        let Some(controller) = self.focused_controller_mut() else {
            return;
        };

        let result = match key.code {
            _ if submit_shortcut => controller.submit(),
            KeyCode::Tab => {
                controller.next_field();
                return;
            }
            KeyCode::BackTab => {
                controller.prev_field();
                return;
            }
            KeyCode::Enter if controller.form().is_submit_active() => controller.submit(),
            KeyCode::Enter => {
                let multiline = controller
                    .form()
                    .fields
                    .get(controller.form().active_field_index)
                    .is_some_and(|f| f.is_multiline());
                if multiline {
                    controller.input_char('\n');
                } else {
                    controller.next_field();
                }
                return;
            }
            KeyCode::Backspace => {
                controller.backspace();
                return;
            }
            // Shortcut chords never reach the field
            KeyCode::Char(c)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                controller.input_char(c);
                return;
            }
            _ => return,
        };

        match result {
            Ok(true) => self.state.status_message = Some("Sending...".to_string()),
            Ok(false) => {}
            Err(e) => self.state.push_validation_notice(e.to_string()),
        }
    }

    fn focus_page_form(&mut self) {
        if let Some(form) = self.page_form.as_mut() {
            if form.status() != FormStatus::Submitted {
                form.focus_first();
                self.state.nav.menu_open = false;
                self.state.focus = Focus::PageForm;
            }
        }
    }

    fn focus_newsletter(&mut self) {
        if self.newsletter.status() != FormStatus::Submitted {
            self.newsletter.focus_first();
            self.state.nav.menu_open = false;
            self.state.focus = Focus::Newsletter;
        }
    }

    /// Navigate to a page, saving the current one in history
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            self.state.nav.menu_open = false;
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.enter_view(view);
    }

    /// Go back to the previous page
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.enter_view(view);
        }
    }

    fn enter_view(&mut self, view: View) {
        self.state.current_view = view;
        self.state.nav.reset();
        self.state.focus = Focus::Page;
        let next = self.build_page_form(view);
        // A failure of the request still in flight must reach the user
        if let Some(old) = std::mem::replace(&mut self.page_form, next) {
            if old.status() == FormStatus::Submitting {
                self.retired_forms.push(old);
            }
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_notice() {
            return Ok(());
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_SCROLL_ROWS),
            _ => {}
        }
        Ok(())
    }

    fn scroll_down(&mut self, rows: usize) {
        self.state.nav.scroll_down(rows);
        let max = self.max_scroll();
        self.state.nav.clamp_scroll(max);
    }

    fn scroll_up(&mut self, rows: usize) {
        self.state.nav.scroll_up(rows);
    }

    fn max_scroll(&self) -> usize {
        // terminal_size is (height, width)
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        crate::ui::max_scroll(self, Rect::new(0, 0, width, height))
    }

    fn copy_email(&mut self) -> Result<()> {
        let Some(email) = self.state.content.email().map(str::to_string) else {
            return Ok(());
        };
        match self.copy_to_clipboard(&email) {
            Ok(()) => self.copy_message = Some(format!("Copied {email}")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{MockRemoteClientTrait, SubmitError};
    use crate::state::NoticeKind;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(mock: MockRemoteClientTrait) -> App {
        App::with_client(
            FolioConfig::default(),
            SiteContent::default(),
            Arc::new(mock),
        )
    }

    fn app() -> App {
        app_with(MockRemoteClientTrait::new())
    }

    /// Focus the page form and fill every required field
    fn fill_contact_form(app: &mut App) {
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Ada");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Hello");
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_starts_on_home_with_form() {
            let app = app();
            assert_eq!(app.state.current_view, View::Home);
            assert!(app.page_form.is_some());
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_shortcuts_switch_pages() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('3'))).unwrap();
            assert_eq!(app.state.current_view, View::Projects);
            assert!(app.page_form.is_none());

            app.handle_key(key(KeyCode::Char('c'))).unwrap();
            assert_eq!(app.state.current_view, View::Contact);
            assert!(app.page_form.is_some());
        }

        #[tokio::test]
        async fn test_navigate_saves_history_and_go_back_restores() {
            let mut app = app();
            app.navigate(View::About);
            app.navigate(View::Projects);
            assert_eq!(app.state.view_history, vec![View::Home, View::About]);

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::About);
        }

        #[tokio::test]
        async fn test_go_back_empty_history_does_nothing() {
            let mut app = app();
            app.go_back();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_navigate_to_same_page_keeps_form() {
            let mut app = app();
            app.page_form
                .as_mut()
                .unwrap()
                .update_field("name", "Ada")
                .unwrap();
            app.navigate(View::Home);
            let form = app.page_form.as_ref().unwrap().form();
            assert_eq!(form.field("name").unwrap().value, "Ada");
            assert!(app.state.view_history.is_empty());
        }

        #[tokio::test]
        async fn test_navigation_rebuilds_page_form() {
            let mut app = app();
            app.page_form
                .as_mut()
                .unwrap()
                .update_field("name", "Ada")
                .unwrap();
            app.navigate(View::Contact);
            let form = app.page_form.as_ref().unwrap();
            assert_eq!(form.form().field("name").unwrap().value, "");
        }

        #[tokio::test]
        async fn test_menu_toggle_and_close_on_navigate() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            assert!(app.state.nav.menu_open);
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            assert!(!app.state.nav.menu_open);
            assert_eq!(app.state.current_view, View::About);
        }

        #[tokio::test]
        async fn test_esc_closes_menu_before_going_back() {
            let mut app = app();
            app.navigate(View::About);
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::About);
            assert!(!app.state.nav.menu_open);
        }

        #[tokio::test]
        async fn test_quit_keys() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());

            let mut app = self::app();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_scroll_past_threshold_sets_scrolled() {
            let mut app = app();
            app.terminal_size = Some((24, 80));
            for _ in 0..5 {
                app.handle_key(key(KeyCode::Char('j'))).unwrap();
            }
            assert_eq!(app.state.nav.scroll_offset(), 5);
            assert!(app.state.nav.is_scrolled());

            app.handle_key(key(KeyCode::Char('g'))).unwrap();
            assert!(!app.state.nav.is_scrolled());
        }

        #[tokio::test]
        async fn test_scroll_is_clamped_to_page() {
            let mut app = app();
            app.terminal_size = Some((200, 200));
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            assert_eq!(app.state.nav.scroll_offset(), 0);
        }

        #[tokio::test]
        async fn test_mouse_wheel_scrolls() {
            let mut app = app();
            app.terminal_size = Some((24, 80));
            let wheel = |kind| MouseEvent {
                kind,
                column: 10,
                row: 10,
                modifiers: KeyModifiers::NONE,
            };
            app.handle_mouse(wheel(MouseEventKind::ScrollDown)).unwrap();
            assert_eq!(app.state.nav.scroll_offset(), WHEEL_SCROLL_ROWS);
            app.handle_mouse(wheel(MouseEventKind::ScrollUp)).unwrap();
            assert_eq!(app.state.nav.scroll_offset(), 0);
            app.handle_mouse(wheel(MouseEventKind::Down(MouseButton::Left)))
                .unwrap();
            assert_eq!(app.state.nav.scroll_offset(), 0);
        }

        #[tokio::test]
        async fn test_navigation_resets_scroll() {
            let mut app = app();
            app.terminal_size = Some((24, 80));
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            app.navigate(View::About);
            assert_eq!(app.state.nav.scroll_offset(), 0);
        }
    }

    mod projects_filter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_arrows_cycle_filters_on_projects() {
            let mut app = app();
            app.navigate(View::Projects);
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.active_filter, "ui design");
            app.handle_key(key(KeyCode::Left)).unwrap();
            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(app.state.active_filter, "dashboard");
        }

        #[tokio::test]
        async fn test_arrows_ignored_elsewhere() {
            let mut app = app();
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.active_filter, "all");
        }
    }

    mod forms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_tab_focuses_page_form_and_types() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.focus, Focus::PageForm);
            type_text(&mut app, "q1");
            // Typed characters go to the field, not the page shortcuts
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view, View::Home);
            let form = app.page_form.as_ref().unwrap().form();
            assert_eq!(form.field("name").unwrap().value, "q1");
        }

        #[tokio::test]
        async fn test_esc_leaves_form_focus() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.focus, Focus::Page);
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_tab_on_page_without_form_does_nothing() {
            let mut app = app();
            app.navigate(View::About);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.focus, Focus::Page);
        }

        #[tokio::test]
        async fn test_enter_in_message_adds_newline() {
            let mut app = app();
            fill_contact_form(&mut app);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "there");
            let form = app.page_form.as_ref().unwrap().form();
            assert_eq!(form.field("message").unwrap().value, "Hello\nthere");
        }

        #[tokio::test]
        async fn test_missing_fields_raise_notice_without_request() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);

            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(
                app.state.current_notice(),
                Some("Please fill out the Your Name field.")
            );
            let notice = app.state.front_notice().unwrap();
            assert_eq!(notice.kind, NoticeKind::Validation);
            assert_eq!(app.page_form.as_ref().unwrap().status(), FormStatus::Idle);
        }

        #[tokio::test]
        async fn test_successful_send_shows_confirmation() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_submit().times(1).returning(|_, _| Ok(()));
            let mut app = app_with(mock);

            fill_contact_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(
                app.page_form.as_ref().unwrap().status(),
                FormStatus::Submitting
            );
            assert_eq!(app.state.status_message.as_deref(), Some("Sending..."));

            app.page_form.as_mut().unwrap().settle().await;
            app.poll_background();

            assert_eq!(
                app.page_form.as_ref().unwrap().status(),
                FormStatus::Submitted
            );
            assert_eq!(app.state.focus, Focus::Page);
            assert!(!app.state.has_notice());
        }

        #[tokio::test]
        async fn test_failed_send_queues_blocking_notice() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_, _| Err(SubmitError::Rejected { status: 500 }));
            let mut app = app_with(mock);

            fill_contact_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.page_form.as_mut().unwrap().settle().await;
            app.poll_background();

            assert_eq!(
                app.state.current_notice(),
                Some("There was an error sending your message. Please try again.")
            );
            // Values survive for a retry
            let form = app.page_form.as_ref().unwrap().form();
            assert_eq!(form.field("name").unwrap().value, "Ada");

            // Keys only dismiss while the notice is up
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(form_value(&app, "message"), "Hello");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_notice());
            assert_eq!(app.state.focus, Focus::PageForm);
        }

        fn form_value(app: &App, name: &str) -> String {
            app.page_form
                .as_ref()
                .unwrap()
                .form()
                .field(name)
                .unwrap()
                .value
                .clone()
        }

        #[tokio::test]
        async fn test_newsletter_signup_from_any_page() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_submit()
                .withf(|endpoint, body| {
                    endpoint == crate::config::DEFAULT_NEWSLETTER_ENDPOINT
                        && body["type"] == "newsletter_subscription"
                        && body["email"] == "ada@example.com"
                })
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = app_with(mock);
            app.navigate(View::Projects);

            app.handle_key(key(KeyCode::Char('n'))).unwrap();
            assert_eq!(app.state.focus, Focus::Newsletter);
            type_text(&mut app, "ada@example.com");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            app.newsletter.settle().await;
            app.poll_background();
            assert_eq!(app.newsletter.status(), FormStatus::Submitted);
            assert!(app.newsletter.has_pending_revert());
            assert_eq!(app.state.focus, Focus::Page);
        }

        #[tokio::test]
        async fn test_newsletter_survives_navigation() {
            let mut app = app();
            app.newsletter.update_field("email", "ada@example.com").unwrap();
            app.navigate(View::About);
            app.navigate(View::Contact);
            let value = &app.newsletter.form().field("email").unwrap().value;
            assert_eq!(value, "ada@example.com");
        }

        #[tokio::test]
        async fn test_failure_after_leaving_page_still_notifies() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_, _| Err(SubmitError::Transport("reset".into())));
            let mut app = app_with(mock);

            fill_contact_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            app.handle_key(key(KeyCode::Char('2'))).unwrap();
            assert_eq!(app.state.current_view, View::About);
            assert!(app.page_form.is_none());

            for _ in 0..50 {
                tokio::task::yield_now().await;
                app.poll_background();
                if app.state.has_notice() {
                    break;
                }
            }

            assert_eq!(
                app.state.current_notice(),
                Some("There was an error sending your message. Please try again.")
            );
            assert_eq!(
                app.state.front_notice().unwrap().kind,
                NoticeKind::Failure
            );
            assert!(app.retired_forms.is_empty());
        }

        #[tokio::test]
        async fn test_idle_form_is_dropped_on_navigation() {
            let mut app = app();
            app.navigate(View::About);
            assert!(app.retired_forms.is_empty());
        }

        #[tokio::test]
        async fn test_modified_chars_are_not_typed() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "Ada");
            app.handle_key(ctrl('a')).unwrap();
            app.handle_key(KeyEvent {
                code: KeyCode::Char('x'),
                modifiers: KeyModifiers::ALT,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            })
            .unwrap();
            // Shifted letters are ordinary input
            app.handle_key(KeyEvent {
                code: KeyCode::Char('!'),
                modifiers: KeyModifiers::SHIFT,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            })
            .unwrap();

            assert_eq!(form_value(&app, "name"), "Ada!");
            assert_eq!(app.state.focus, Focus::PageForm);
        }
    }

    mod profile_check {
        use super::*;

        #[tokio::test]
        async fn test_check_sets_flag() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_asset_exists()
                .withf(|url| url == "http://assets.test/profile.png")
                .times(1)
                .returning(|_| true);
            let config = FolioConfig {
                profile_image_url: Some("http://assets.test/profile.png".to_string()),
                ..Default::default()
            };
            let mut app = App::with_client(config, SiteContent::default(), Arc::new(mock));
            app.start_profile_check();

            for _ in 0..50 {
                tokio::task::yield_now().await;
                app.poll_background();
                if app.profile_check.is_none() {
                    break;
                }
            }
            assert!(app.state.profile_image_available);
        }

        #[tokio::test]
        async fn test_no_url_skips_check() {
            let mut mock = MockRemoteClientTrait::new();
            mock.expect_asset_exists().never();
            let mut app = app_with(mock);
            app.start_profile_check();
            assert!(app.profile_check.is_none());
            assert!(!app.state.profile_image_available);
        }
    }
}
