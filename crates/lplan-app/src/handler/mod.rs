//! Handler module - TEA update function and helpers
//!
//! This module contains the main update function and related helpers:
//! - `update`: Main TEA update function
//! - `keys`: Key event handlers for different UI modes
//! - `submission`: Form editing, validation and generation results
//! - `scroll`: Plan view scrolling

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod submission;
mod update;


pub use keys::handle_key;
pub use update::update;

use lplan_core::{LessonPlanRequest, Notice};

use crate::message::Message;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send one generation request; the outcome comes back as
    /// `GenerationCompleted` or `GenerationFailed`
    GeneratePlan { request: LessonPlanRequest },

    /// Hand a notice to the injected notifier
    Notify(Notice),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
