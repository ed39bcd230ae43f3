//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the form and the plan are stacked vertically
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 70;

/// Rows the form needs: five label/input pairs, a spacer, the button, the
/// hint line and the borders
pub const FORM_HEIGHT: u16 = 5 * 2 + 1 + 1 + 1 + 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,
    /// Lesson details form
    pub form: Rect,
    /// Generated plan panel
    pub plan: Rect,
    /// Key hints
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [form, plan] = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
    } else {
        Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)]).areas(body)
    };

    ScreenAreas {
        header,
        form,
        plan,
        footer,
    }
}
