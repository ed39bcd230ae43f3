//! User-facing notices
//!
//! A [`Notice`] is what the submission flow hands to its notifier when
//! something needs the user's attention. How it is shown (modal dialog,
//! stderr line, ...) is up to the notifier.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Local::now(),
        }
    }

    /// The single notice shown when a generation request fails
    pub fn generation_failed() -> Self {
        Self::new(
            NoticeLevel::Error,
            "Error",
            "Failed to generate lesson plan.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_notice() {
        let notice = Notice::generation_failed();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Failed to generate lesson plan.");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let value = serde_json::to_value(NoticeLevel::Warning).unwrap();
        assert_eq!(value, serde_json::json!("warning"));
    }
}
