//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget tests can render and then search
//! the buffer for text.

use lplan_app::AppState;
use lplan_core::{FormField, FormValues, LessonPlanResponse};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test wrapper around a ratatui `Terminal<TestBackend>`
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame with a custom rendering function (e.g. `view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere (within one row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string, one buffer row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| get_line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// State with the three required fields filled in
pub fn filled_state() -> AppState {
    AppState::new().with_form(
        FormValues::new()
            .with(FormField::Topic, "Ciclo da água")
            .with(FormField::Audience, "6º ano")
            .with(FormField::Duration, "50 minutos"),
    )
}

/// A response document covering every section
pub fn full_response() -> LessonPlanResponse {
    LessonPlanResponse::from_value(serde_json::json!({
        "habilidades_bncc": ["EF06CI04"],
        "objetivos_aula": ["Descrever as etapas do ciclo da água"],
        "metodologia": {
            "justificativa": "Aprendizagem ativa",
            "metodologias_sugeridas": ["Sala de aula invertida"]
        },
        "materiais_necessarios": ["Projetor"],
        "estrutura_aula": {
            "tempo_total": "50 min",
            "etapas": [{"nome": "Intro", "tempo": "5min", "atividades": ["Discussão", "Leitura"]}]
        },
        "avaliacao": {"tipos": ["Formativa"], "criterios": ["Participação"]},
        "para_saber_mais": ["Atlas da água"]
    }))
    .expect("valid fixture")
}
