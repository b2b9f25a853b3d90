//! Application state definitions

use super::content::{filter_projects, Project, SiteContent, FILTER_ALL, PROJECT_FILTERS};
use super::nav::NavState;
use std::collections::VecDeque;

/// Current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl View {
    /// Pages in header order
    pub const ALL: [View; 4] = [View::Home, View::About, View::Projects, View::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact Me",
        }
    }

    /// Digit shortcut shown in the header
    pub fn shortcut(&self) -> char {
        match self {
            Self::Home => '1',
            Self::About => '2',
            Self::Projects => '3',
            Self::Contact => '4',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' | 'h' => Some(Self::Home),
            '2' | 'a' => Some(Self::About),
            '3' | 'p' => Some(Self::Projects),
            '4' | 'c' => Some(Self::Contact),
            _ => None,
        }
    }

    /// Pages that embed the contact form
    pub fn has_contact_form(&self) -> bool {
        matches!(self, Self::Home | Self::Contact)
    }
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page scrolling and navigation shortcuts
    #[default]
    Page,
    /// The contact form embedded in the current page
    PageForm,
    /// The footer newsletter signup
    Newsletter,
}

impl Focus {
    pub fn is_form(&self) -> bool {
        !matches!(self, Self::Page)
    }
}

/// Why a notice was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A request failed
    Failure,
    /// Input was rejected before anything was sent
    Validation,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Failure => "Something went wrong",
            Self::Validation => "Check your details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,
    pub nav: NavState,
    pub focus: Focus,

    // Content
    pub content: SiteContent,
    pub profile_image_available: bool,

    // Projects page filter, stored lowercased
    pub active_filter: String,

    // Blocking notices, oldest first
    pub notices: VecDeque<Notice>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content,
            active_filter: FILTER_ALL.to_string(),
            ..Default::default()
        }
    }

    /// Queue a failure notice that must be dismissed before anything else
    pub fn push_notice(&mut self, message: impl Into<String>) {
        self.queue_notice(NoticeKind::Failure, message.into());
    }

    /// Queue a notice for input that failed the form's checks
    pub fn push_validation_notice(&mut self, message: impl Into<String>) {
        self.queue_notice(NoticeKind::Validation, message.into());
    }

    fn queue_notice(&mut self, kind: NoticeKind, message: String) {
        self.notices.push_back(Notice { kind, message });
    }

    pub fn front_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn current_notice(&self) -> Option<&str> {
        self.front_notice().map(|n| n.message.as_str())
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Index of the active filter within [`PROJECT_FILTERS`]
    pub fn active_filter_index(&self) -> usize {
        PROJECT_FILTERS
            .iter()
            .position(|f| f.to_lowercase() == self.active_filter)
            .unwrap_or(0)
    }

    pub fn set_filter(&mut self, label: &str) {
        self.active_filter = label.to_lowercase();
        self.nav.reset();
    }

    pub fn next_filter(&mut self) {
        let next = (self.active_filter_index() + 1) % PROJECT_FILTERS.len();
        self.set_filter(PROJECT_FILTERS[next]);
    }

    pub fn prev_filter(&mut self) {
        let current = self.active_filter_index();
        let prev = if current == 0 {
            PROJECT_FILTERS.len() - 1
        } else {
            current - 1
        };
        self.set_filter(PROJECT_FILTERS[prev]);
    }

    /// Projects matching the active filter
    pub fn visible_projects(&self) -> Vec<&Project> {
        filter_projects(&self.content.projects, &self.active_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_shortcuts_round_trip() {
            for view in View::ALL {
                assert_eq!(View::from_shortcut(view.shortcut()), Some(view));
            }
            assert_eq!(View::from_shortcut('x'), None);
        }

        #[test]
        fn test_contact_form_pages() {
            assert!(View::Home.has_contact_form());
            assert!(View::Contact.has_contact_form());
            assert!(!View::About.has_contact_form());
            assert!(!View::Projects.has_contact_form());
        }
    }

    mod notices {
        use super::*;

        #[test]
        fn test_notices_are_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_notice());
            state.push_notice("first");
            state.push_notice("second");
            assert_eq!(state.current_notice(), Some("first"));
            state.dismiss_notice();
            assert_eq!(state.current_notice(), Some("second"));
            state.dismiss_notice();
            assert!(state.current_notice().is_none());
        }

        #[test]
        fn test_notice_kinds_keep_their_titles() {
            let mut state = AppState::default();
            state.push_validation_notice("Please fill out the Email field.");
            state.push_notice("There was an error subscribing. Please try again.");

            let first = state.front_notice().unwrap();
            assert_eq!(first.kind, NoticeKind::Validation);
            assert_eq!(first.kind.title(), "Check your details");
            state.dismiss_notice();
            let second = state.front_notice().unwrap();
            assert_eq!(second.kind.title(), "Something went wrong");
        }

        #[test]
        fn test_dismiss_empty_is_noop() {
            let mut state = AppState::default();
            state.dismiss_notice();
            assert!(!state.has_notice());
        }
    }

    mod filters {
        use super::*;

        #[test]
        fn test_new_starts_with_all() {
            let state = AppState::new(SiteContent::default());
            assert_eq!(state.active_filter, "all");
            assert_eq!(state.active_filter_index(), 0);
            assert_eq!(state.visible_projects().len(), 4);
        }

        #[test]
        fn test_next_filter_wraps() {
            let mut state = AppState::new(SiteContent::default());
            for _ in 0..PROJECT_FILTERS.len() {
                state.next_filter();
            }
            assert_eq!(state.active_filter, "all");
        }

        #[test]
        fn test_prev_filter_wraps_to_last() {
            let mut state = AppState::new(SiteContent::default());
            state.prev_filter();
            assert_eq!(state.active_filter, "dashboard");
            assert_eq!(state.visible_projects().len(), 1);
        }

        #[test]
        fn test_set_filter_resets_scroll() {
            let mut state = AppState::new(SiteContent::default());
            state.nav.scroll_down(10);
            state.set_filter("UI Design");
            assert_eq!(state.active_filter, "ui design");
            assert_eq!(state.nav.scroll_offset(), 0);
            assert_eq!(state.visible_projects().len(), 2);
        }
    }

    #[test]
    fn test_focus_is_form() {
        assert!(!Focus::Page.is_form());
        assert!(Focus::PageForm.is_form());
        assert!(Focus::Newsletter.is_form());
    }
}
