//! Headless mode - one submission without the TUI
//!
//! The form is filled from the command line, submitted through the same
//! update loop the TUI uses, and the outcome is written to stdout (plan) or
//! stderr (validation hint, failure notice).

pub mod runner;

use std::io::Write;

use lplan_core::prelude::*;
use lplan_core::{render_plan, LessonPlanResponse};

pub use runner::{run_headless, HeadlessOutcome};

/// How a generated plan is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The seven rendered sections as plain text
    #[default]
    Text,
    /// The response document as received, pretty-printed
    Json,
}

/// Write a generated plan in the requested format
pub fn write_plan(
    out: &mut impl Write,
    doc: &LessonPlanResponse,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_plan(doc))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(doc)?)?,
    }
    out.flush()?;
    Ok(())
}
