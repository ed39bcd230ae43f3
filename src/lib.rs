//! Lesson Planner Library
//!
//! A terminal front-end for an AI-assisted lesson-plan generator. The binary
//! either runs the TUI or, with `--headless`, submits one request built from
//! the command line and prints the result.

pub mod cli;
pub mod headless;

pub use cli::Args;
pub use headless::{run_headless, HeadlessOutcome, OutputFormat};
