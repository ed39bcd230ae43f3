//! # lplan-core - Core Domain Types
//!
//! Foundation crate for Lesson Planner. Provides the request/response
//! documents of the generation endpoint, the form schema, the plan layout,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Documents (`plan`)
//! - [`LessonPlanRequest`] - Body of a generation request
//! - [`LessonPlanResponse`] - Partial generation result, every field optional
//! - [`LessonPlan`] - Normalized plan with empty defaults for missing parts
//!
//! ### Form (`form`)
//! - [`FormField`] - The five inputs with key, label and required flag
//! - [`FormValues`] - Current text of every input
//!
//! ### Layout (`render`)
//! - [`render_plan()`] - Map a response document to seven sections
//! - [`RenderedPlan`], [`Section`], [`Block`] - Laid-out plan
//!
//! ### Notices (`notice`)
//! - [`Notice`] - Message for the user (e.g. generation failure)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lplan_core::prelude::*;
//! ```

pub mod error;
pub mod form;
pub mod logging;
pub mod notice;
pub mod plan;
pub mod render;

/// Prelude for common imports used throughout all Lesson Planner crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use form::{form_schema, FormField, FormSpec, FormValues};
pub use notice::{Notice, NoticeLevel};
pub use plan::{
    Assessment, AssessmentDoc, LessonPlan, LessonPlanRequest, LessonPlanResponse, LessonStep,
    LessonStructure, LessonStructureDoc, Methodology, MethodologyDoc, StepDoc,
};
pub use render::{
    layout, render_plan, step_line, Block, RenderedPlan, Section, SectionKind, LIST_SEPARATOR,
};
