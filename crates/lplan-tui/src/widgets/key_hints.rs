//! One-line key hint bar

use lplan_app::state::{AppState, Focus, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::Notice => vec![("Enter", "dismiss")],
            UiMode::ConfirmDialog => vec![("y", "quit"), ("n", "cancel")],
            UiMode::Normal => {
                let mut hints = vec![("Tab", "next"), ("S-Tab", "prev")];
                match self.state.focus {
                    Focus::Results => hints.push(("↑↓/PgUp/PgDn", "scroll")),
                    Focus::Field(_) => {
                        hints.push(("Ctrl+U", "clear"));
                        if !self.state.loading {
                            hints.push(("Enter", "generate"));
                        }
                    }
                    Focus::SubmitButton if !self.state.loading => {
                        hints.push(("Enter", "generate"))
                    }
                    Focus::SubmitButton => {}
                }
                hints.push(("Esc", "quit"));
                hints
            }
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
