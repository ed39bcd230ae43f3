//! Test utilities for the generation transport
//!
//! Provides [`MockPlanGenerator`], a [`PlanGenerator`] that records every
//! request it receives and answers with a canned outcome.

use std::sync::{Mutex, PoisonError};

use lplan_core::prelude::*;
use lplan_core::{LessonPlanRequest, LessonPlanResponse};

use crate::generator::PlanGenerator;

/// What the mock answers to every request
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Respond(LessonPlanResponse),
    Fail(String),
}

/// Recording generator with a fixed outcome
#[derive(Debug)]
pub struct MockPlanGenerator {
    outcome: MockOutcome,
    calls: Mutex<Vec<LessonPlanRequest>>,
}

impl MockPlanGenerator {
    /// A generator that returns `doc` for every request
    pub fn responding(doc: LessonPlanResponse) -> Self {
        Self {
            outcome: MockOutcome::Respond(doc),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A generator whose every request fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fail(reason.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order
    pub fn calls(&self) -> Vec<LessonPlanRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl PlanGenerator for MockPlanGenerator {
    async fn generate(&self, request: &LessonPlanRequest) -> Result<LessonPlanResponse> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        match &self.outcome {
            MockOutcome::Respond(doc) => Ok(doc.clone()),
            MockOutcome::Fail(reason) => Err(Error::generation_failed(reason.clone())),
        }
    }
}

/// A request with the three required fields filled in
pub fn test_request(topic: &str) -> LessonPlanRequest {
    LessonPlanRequest {
        topic: topic.to_string(),
        audience: "6th grade".to_string(),
        duration: "50 minutes".to_string(),
        objectives: String::new(),
        materials: String::new(),
    }
}
