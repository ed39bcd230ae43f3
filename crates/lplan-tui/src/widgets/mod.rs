//! Custom widget components

mod confirm_dialog;
mod header;
mod key_hints;
mod lesson_form;
pub mod modal_overlay;
mod notice_dialog;
pub mod plan_view;
mod text;

pub use confirm_dialog::ConfirmDialog;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use lesson_form::LessonForm;
pub use notice_dialog::NoticeDialog;
pub use plan_view::{PlanPlaceholder, PlanView};

/// Braille spinner frames for the loading indicator
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
