//! lplan-tui - Terminal UI for Lesson Planner
//!
//! Renders the lesson-plan form and the generated plan with ratatui, polls
//! crossterm for keys and drives the `lplan-app` update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
