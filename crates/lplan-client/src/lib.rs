//! # lplan-client - Generation Endpoint Transport
//!
//! Sends lesson-plan requests to the generation endpoint and decodes the
//! answer.
//!
//! Depends on [`lplan_core`] for the request/response documents and error
//! handling.
//!
//! ## Public API
//!
//! - [`PlanGenerator`] - Async trait for anything that turns a request into a plan
//! - [`HttpPlanGenerator`] - reqwest-based implementation (one POST per call)
//! - [`parse_endpoint()`], [`DEFAULT_ENDPOINT`] - Endpoint handling
//!
//! With the `test-helpers` feature, [`test_utils`] provides a recording mock.

pub mod endpoint;
pub mod generator;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use endpoint::{default_endpoint, parse_endpoint, DEFAULT_ENDPOINT};
pub use generator::{HttpPlanGenerator, LocalPlanGenerator, PlanGenerator};
