//! Confirm dialog state.
//!
//! Data model for the quit confirmation. The widget lives in
//! `lplan-tui::widgets::confirm_dialog`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button labels with the message each one sends
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Shown when quitting while a generation request is in flight
    pub fn quit_while_generating() -> Self {
        Self::new(
            "Quit Lesson Planner?",
            "A lesson plan is still being generated.",
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        )
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(label, _)| label.as_str())
    }
}
