//! Lesson details form
//!
//! Five labelled inputs, the submit button and the validation hint. Each
//! input takes two rows: the label (with `*` for required fields) and the
//! value.

use lplan_app::state::{AppState, Focus};
use lplan_core::FormField;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

use super::{text, SPINNER};

const CURSOR: &str = "█";

pub struct LessonForm<'a> {
    state: &'a AppState,
}

impl<'a> LessonForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn is_focused(&self, field: FormField) -> bool {
        self.state.focus == Focus::Field(field)
    }

    fn label_line(&self, field: FormField) -> Line<'static> {
        let label_style = if self.is_focused(field) {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let mut spans = vec![Span::styled(field.label(), label_style)];
        if field.is_required() {
            spans.push(Span::styled(" *", styles::required_marker()));
        }
        Line::from(spans)
    }

    fn input_line(&self, field: FormField, width: u16) -> Line<'a> {
        let focused = self.is_focused(field);
        let value = self.state.form.get(field);
        let width = usize::from(width.saturating_sub(1));

        if value.is_empty() && !focused {
            return Line::from(Span::styled(
                format!(" {}", field.placeholder()),
                styles::text_muted().add_modifier(Modifier::ITALIC),
            ));
        }

        let cursor_width = if focused { CURSOR.width() } else { 0 };
        let visible = text::tail(value, width.saturating_sub(cursor_width));
        let mut spans = vec![Span::raw(" "), Span::raw(visible)];
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(palette::ACCENT)));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        let label = self.state.submit_label();
        if self.state.loading {
            let spinner = SPINNER[self.state.spinner_frame % SPINNER.len()];
            return Line::from(Span::styled(
                format!("[ {spinner} {label} ]"),
                styles::text_muted(),
            ));
        }

        let style = if self.state.focus == Focus::SubmitButton {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };
        Line::from(Span::styled(format!("[ {label} ]"), style))
    }
}

impl Widget for LessonForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(self.state.focus, Focus::Field(_) | Focus::SubmitButton);
        let block = styles::glass_block(focused)
            .title(" Lesson Details ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        for field in FormField::ALL {
            if y + 1 >= bottom {
                return;
            }
            buf.set_line(inner.x, y, &self.label_line(field), inner.width);

            let input_area = Rect::new(inner.x, y + 1, inner.width, 1);
            buf.set_style(input_area, styles::input(self.is_focused(field)));
            buf.set_line(
                inner.x,
                y + 1,
                &self.input_line(field, inner.width),
                inner.width,
            );
            y += 2;
        }

        // Spacer
        y += 1;
        if y >= bottom {
            return;
        }
        Paragraph::new(self.button_line())
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, 1), buf);

        y += 1;
        if y >= bottom {
            return;
        }
        if let Some(hint) = &self.state.validation_hint {
            Paragraph::new(Span::styled(
                hint.as_str(),
                Style::default().fg(palette::STATUS_RED),
            ))
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}
