//! Plan view state - scroll position and viewport bounds.
//!
//! Shared by the scroll handlers (which move the offset) and the TUI panel
//! (which reports how many lines exist and how many fit).

/// Scroll state of the generated plan panel
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlanViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl PlanViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Update content bounds after a render, clamping the offset
    pub fn update_content_size(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Forget the previous plan's position
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn page_size(&self) -> usize {
        self.visible_lines.saturating_sub(2).max(1)
    }
}
