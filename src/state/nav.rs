//! Header navigation state derived from the page scroll position

/// Rows scrolled before the header switches to its raised style
pub const SCROLLED_THRESHOLD: usize = 3;

/// Scroll position of the current page plus the header flags derived from it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    scroll_offset: usize,
    scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// True once the page is scrolled past [`SCROLLED_THRESHOLD`]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Record a new viewport offset and recompute the scrolled flag
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrolled = offset > SCROLLED_THRESHOLD;
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.set_scroll_offset(self.scroll_offset.saturating_add(rows));
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.set_scroll_offset(self.scroll_offset.saturating_sub(rows));
    }

    /// Clamp the offset to the content height of the current page
    pub fn clamp_scroll(&mut self, max_offset: usize) {
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A fresh page starts at the top with the menu closed
    pub fn reset(&mut self) {
        self.set_scroll_offset(0);
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_top_of_page() {
        let nav = NavState::default();
        assert_eq!(nav.scroll_offset(), 0);
        assert!(!nav.is_scrolled());
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_scrolled_flips_above_threshold() {
        let mut nav = NavState::default();
        nav.set_scroll_offset(SCROLLED_THRESHOLD);
        assert!(!nav.is_scrolled());
        nav.set_scroll_offset(SCROLLED_THRESHOLD + 1);
        assert!(nav.is_scrolled());
        nav.set_scroll_offset(0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_scroll_up_saturates() {
        let mut nav = NavState::default();
        nav.scroll_up(5);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_down_then_clamp() {
        let mut nav = NavState::default();
        nav.scroll_down(10);
        assert!(nav.is_scrolled());
        nav.clamp_scroll(2);
        assert_eq!(nav.scroll_offset(), 2);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_toggle_menu_and_reset() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.scroll_down(8);
        nav.reset();
        assert_eq!(nav, NavState::default());
    }
}
