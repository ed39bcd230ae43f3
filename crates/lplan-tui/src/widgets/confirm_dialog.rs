//! Confirmation dialog widget for the quit confirmation

use lplan_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

use super::modal_overlay::{centered_rect, dim_background};

/// Keys bound to the first and second option
const OPTION_KEYS: [(&str, Style); 2] = [
    ("y", Style::new().fg(palette::STATUS_GREEN).add_modifier(Modifier::BOLD)),
    ("n", Style::new().fg(palette::STATUS_RED).add_modifier(Modifier::BOLD)),
];

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for ((key, key_style), label) in OPTION_KEYS.into_iter().zip(self.state.labels()) {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(label, styles::text_secondary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(50, 7, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(message_area, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}
