//! Message types for the application (TEA pattern)

use lplan_core::{FormField, LessonPlanResponse, Notice};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic redraw tick (drives the loading spinner)
    Tick,

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Ask to quit; may open a confirmation dialog
    RequestQuit,
    /// Quit immediately
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    /// Replace the text of one field
    FieldChanged { field: FormField, value: String },
    /// Validate the form and start generation
    Submit,

    // ─────────────────────────────────────────────────────────
    // Generation results
    // ─────────────────────────────────────────────────────────
    GenerationCompleted { response: Box<LessonPlanResponse> },
    /// `error` is the failure reason, for the log only
    GenerationFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────
    ShowNotice(Notice),
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Plan view scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}
