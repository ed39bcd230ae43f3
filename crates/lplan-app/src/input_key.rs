//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] before they reach
//! the update loop, so `lplan-app` never depends on a terminal library and
//! handler tests can feed keys directly.

/// A key press as seen by the key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including Shift variants
    Char(char),
    /// Character typed with Ctrl held (Ctrl+C, Ctrl+U, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Printable character carried by this key, if any
    pub fn as_char(self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(c),
            _ => None,
        }
    }
}
