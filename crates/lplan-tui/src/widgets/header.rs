//! Header bar
//!
//! App title on the left, generation status and endpoint on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

use super::SPINNER;

pub struct MainHeader<'a> {
    endpoint: &'a str,
    loading: bool,
    spinner_frame: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self {
            endpoint,
            loading: false,
            spinner_frame: 0,
        }
    }

    pub fn loading(mut self, loading: bool, spinner_frame: usize) -> Self {
        self.loading = loading;
        self.spinner_frame = spinner_frame;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_label, status_style) = if self.loading {
            (
                SPINNER[self.spinner_frame % SPINNER.len()],
                "Generating",
                Style::default().fg(palette::STATUS_YELLOW),
            )
        } else {
            ("●", "Ready", Style::default().fg(palette::STATUS_GREEN))
        };

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled("Lesson Planner", styles::accent_bold()),
            Span::raw(" "),
            Span::styled(status_label, status_style),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let right = Line::from(vec![
            Span::styled("POST ", styles::text_muted()),
            Span::styled(self.endpoint, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;
        // Endpoint is dropped when it would overlap the title
        if left_width + right_width + 1 <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}
