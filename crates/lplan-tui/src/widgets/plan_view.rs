//! Generated lesson plan panel
//!
//! Lays the response out with [`render_plan`], wraps every block to the
//! panel width and shows the window selected by [`PlanViewState`].

use lplan_app::plan_view_state::PlanViewState;
use lplan_core::{render_plan, Block as PlanBlock, LessonPlanResponse, RenderedPlan};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

use super::{text, SPINNER};

pub const PLAN_TITLE: &str = " Generated Lesson Plan ";

const INDENT: &str = "  ";
const BULLET: &str = "  • ";

/// Convert a laid-out plan into styled lines no wider than `width`
pub fn plan_lines(plan: &RenderedPlan, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, section) in plan.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            section.title(),
            styles::section_title(),
        )));

        for block in &section.blocks {
            match block {
                PlanBlock::Paragraph(body) => {
                    push_wrapped(&mut lines, INDENT, body, width, styles::text_secondary())
                }
                PlanBlock::Labeled { label, value } => {
                    let lead = format!("{label}: ");
                    push_labeled(&mut lines, &lead, value, width);
                }
                PlanBlock::Bullet(_) | PlanBlock::Step { .. } => push_wrapped(
                    &mut lines,
                    BULLET,
                    &block.text(),
                    width,
                    styles::text_primary(),
                ),
            }
        }
    }

    lines
}

/// First line starts with `first`, continuation lines with `first`-wide blanks
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    first: &'static str,
    body: &str,
    width: usize,
    style: Style,
) {
    let prefix_width = first.width();
    let blank = " ".repeat(prefix_width);
    let marker_style = if first == BULLET {
        styles::bullet()
    } else {
        Style::default()
    };

    for (i, chunk) in text::wrap(body, width.saturating_sub(prefix_width))
        .into_iter()
        .enumerate()
    {
        let prefix = if i == 0 {
            Span::styled(first, marker_style)
        } else {
            Span::raw(blank.clone())
        };
        lines.push(Line::from(vec![prefix, Span::styled(chunk, style)]));
    }
}

fn push_labeled(lines: &mut Vec<Line<'static>>, lead: &str, value: &str, width: usize) {
    let prefix_width = INDENT.width() + lead.width();
    let blank = " ".repeat(prefix_width);

    for (i, chunk) in text::wrap(value, width.saturating_sub(prefix_width))
        .into_iter()
        .enumerate()
    {
        let mut spans = if i == 0 {
            vec![
                Span::raw(INDENT),
                Span::styled(lead.to_string(), styles::label()),
            ]
        } else {
            vec![Span::raw(blank.clone())]
        };
        spans.push(Span::styled(chunk, styles::text_primary()));
        lines.push(Line::from(spans));
    }
}

/// Scrollable panel showing one response document
pub struct PlanView<'a> {
    doc: &'a LessonPlanResponse,
    focused: bool,
}

impl<'a> PlanView<'a> {
    pub fn new(doc: &'a LessonPlanResponse) -> Self {
        Self {
            doc,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for PlanView<'_> {
    type State = PlanViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(self.focused)
            .title(PLAN_TITLE)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = plan_lines(&render_plan(self.doc), usize::from(inner.width));
        state.update_content_size(lines.len(), usize::from(inner.height));

        let window: Vec<Line> = lines
            .into_iter()
            .skip(state.offset)
            .take(usize::from(inner.height))
            .collect();
        Paragraph::new(window).render(inner, buf);

        if state.max_offset() > 0 {
            render_scroll_position(area, buf, state);
        }
    }
}

/// `12/40` on the bottom border
fn render_scroll_position(area: Rect, buf: &mut Buffer, state: &PlanViewState) {
    let last_visible = (state.offset + state.visible_lines).min(state.total_lines);
    let label = Line::from(Span::styled(
        format!(" {last_visible}/{} ", state.total_lines),
        styles::text_muted(),
    ));
    let width = label.width() as u16;
    if width + 2 > area.width || area.height == 0 {
        return;
    }
    let x = area.x + area.width - width - 1;
    let y = area.y + area.height - 1;
    buf.set_line(x, y, &label, width);
}

/// Panel content before the first successful generation
pub struct PlanPlaceholder {
    loading: bool,
    spinner_frame: usize,
}

impl PlanPlaceholder {
    pub fn new(loading: bool, spinner_frame: usize) -> Self {
        Self {
            loading,
            spinner_frame,
        }
    }
}

impl Widget for PlanPlaceholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(PLAN_TITLE)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if self.loading {
            Line::from(vec![
                Span::styled(
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    styles::accent_bold(),
                ),
                Span::styled(" Generating plan...", styles::text_secondary()),
            ])
        } else {
            Line::from(Span::styled(
                "Fill in the form and press Enter to generate a plan.",
                styles::text_muted(),
            ))
        };

        let y = inner.y + inner.height / 2;
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{full_response, TestTerminal};
    use serde_json::json;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_all_section_titles_rendered_for_empty_document() {
        let rendered = render_plan(&LessonPlanResponse::default());
        let lines: Vec<String> = plan_lines(&rendered, 60).iter().map(line_text).collect();

        let titles = [
            "BNCC Skills",
            "Lesson Objectives",
            "Methodology",
            "Required Materials",
            "Lesson Structure",
            "Assessment",
            "Further Reading",
        ];
        for title in titles {
            assert!(lines.iter().any(|l| l == title), "missing {title}");
        }
        // Seven titles and six separators, no bodies
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_step_line_is_a_bullet() {
        let doc = LessonPlanResponse::from_value(json!({
            "estrutura_aula": {
                "etapas": [{"nome": "Intro", "tempo": "5min", "atividades": ["Discussão", "Leitura"]}]
            }
        }))
        .unwrap();
        let lines: Vec<String> = plan_lines(&render_plan(&doc), 80)
            .iter()
            .map(line_text)
            .collect();

        assert!(lines.contains(&"  • Intro (5min): Discussão, Leitura".to_string()));
    }

    #[test]
    fn test_long_bullet_wraps_under_text() {
        let doc = LessonPlanResponse::from_value(json!({
            "objetivos_aula": ["compreender as etapas do ciclo hidrológico"]
        }))
        .unwrap();
        let lines: Vec<String> = plan_lines(&render_plan(&doc), 24)
            .iter()
            .map(line_text)
            .collect();

        assert!(lines.contains(&"  • compreender as".to_string()));
        assert!(lines.contains(&"    etapas do ciclo".to_string()));
        assert!(lines.iter().all(|l| l.width() <= 24));
    }

    #[test]
    fn test_justification_keeps_paragraph_breaks() {
        let doc = LessonPlanResponse::from_value(json!({
            "metodologia": {"justificativa": "Aprender fazendo.\nTrabalho em grupo."}
        }))
        .unwrap();
        let lines: Vec<String> = plan_lines(&render_plan(&doc), 80)
            .iter()
            .map(line_text)
            .collect();

        let first = lines.iter().position(|l| l == "  Aprender fazendo.").unwrap();
        assert_eq!(lines[first + 1], "  Trabalho em grupo.");
    }

    #[test]
    fn test_labeled_line() {
        let doc =
            LessonPlanResponse::from_value(json!({"avaliacao": {"tipos": ["Formativa"]}})).unwrap();
        let lines: Vec<String> = plan_lines(&render_plan(&doc), 80)
            .iter()
            .map(line_text)
            .collect();

        assert!(lines.contains(&"  Types: Formativa".to_string()));
    }

    #[test]
    fn test_panel_renders_title_and_content() {
        let mut term = TestTerminal::new();
        let mut state = PlanViewState::new();
        let doc = full_response();

        term.render_stateful_widget(PlanView::new(&doc), term.area(), &mut state);

        assert!(term.buffer_contains("Generated Lesson Plan"));
        assert!(term.buffer_contains("BNCC Skills"));
        assert!(term.buffer_contains("EF06CI04"));
        assert!(state.total_lines > state.visible_lines);
    }

    #[test]
    fn test_scrolled_panel_hides_top() {
        let mut term = TestTerminal::new();
        let mut state = PlanViewState::new();
        let doc = full_response();

        term.render_stateful_widget(PlanView::new(&doc), term.area(), &mut state);
        state.scroll_to_bottom();
        term.render_stateful_widget(PlanView::new(&doc), term.area(), &mut state);

        assert!(!term.buffer_contains("BNCC Skills"));
        assert!(term.buffer_contains("Atlas da água"));
    }

    #[test]
    fn test_placeholder_idle_and_loading() {
        let mut term = TestTerminal::new();
        term.render_widget(PlanPlaceholder::new(false, 0), term.area());
        assert!(term.buffer_contains("Fill in the form"));

        term.render_widget(PlanPlaceholder::new(true, 0), term.area());
        assert!(term.buffer_contains("Generating plan..."));
    }
}
