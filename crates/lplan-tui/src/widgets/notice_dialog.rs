//! Blocking notice dialog

use lplan_core::Notice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, dim_background};
use super::text;

const MODAL_WIDTH: u16 = 50;

pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let message_width = usize::from(MODAL_WIDTH.saturating_sub(4));
        let message_lines: Vec<Line> = text::wrap(&self.notice.message, message_width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, styles::text_primary())))
            .collect();
        let message_height = message_lines.len() as u16;

        // Border, spacer, message, spacer, button, border
        let modal_area = centered_rect(MODAL_WIDTH, message_height + 5, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.notice.title);
        let block = styles::modal_block(&title)
            .title_alignment(Alignment::Center)
            .border_style(styles::notice_border(self.notice.level));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(message_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(message_lines)
            .alignment(Alignment::Center)
            .render(message_area, buf);

        let button = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] OK", styles::text_muted()),
        ]);
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_generation_failure_notice() {
        let mut term = TestTerminal::new();
        let notice = Notice::generation_failed();

        term.render_widget(NoticeDialog::new(&notice), term.area());

        assert!(term.buffer_contains("Error"));
        assert!(term.buffer_contains("Failed to generate lesson plan."));
        assert!(term.buffer_contains("] OK"));
    }
}
