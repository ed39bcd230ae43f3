//! lplan-app - Application state and orchestration for Lesson Planner
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! lesson-plan form: state, messages, the update function, action dispatch
//! to the generation transport, the notification capability and
//! configuration loading.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notify;
pub mod plan_view_state;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notify::{ModalNotifier, Notifier, RecordingNotifier, StderrNotifier};
pub use process::process_message;
pub use state::{AppState, Focus, UiMode};
