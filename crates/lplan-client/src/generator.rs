//! Lesson plan generation over HTTP
//!
//! [`PlanGenerator`] is the seam between the submission flow and the
//! network. [`HttpPlanGenerator`] is the production implementation: one POST
//! per call, JSON in, JSON out, no retries and no timeout.

use lplan_core::prelude::*;
use lplan_core::{LessonPlanRequest, LessonPlanResponse};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::endpoint::{default_endpoint, parse_endpoint};

/// Produces a lesson plan for a request.
///
/// Every failure is reported as [`Error::GenerationFailed`].
#[trait_variant::make(PlanGenerator: Send)]
pub trait LocalPlanGenerator {
    /// Send one generation request and return the decoded document
    async fn generate(&self, request: &LessonPlanRequest) -> Result<LessonPlanResponse>;
}

/// Generator backed by the HTTP generation endpoint
#[derive(Debug, Clone)]
pub struct HttpPlanGenerator {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPlanGenerator {
    /// Create a generator for the given endpoint URL
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self::with_url(parse_endpoint(endpoint)?))
    }

    pub fn with_url(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Default for HttpPlanGenerator {
    fn default() -> Self {
        Self::with_url(default_endpoint())
    }
}

impl PlanGenerator for HttpPlanGenerator {
    async fn generate(&self, request: &LessonPlanRequest) -> Result<LessonPlanResponse> {
        debug!(
            "POST {} (topic={:?}, audience={:?})",
            self.endpoint, request.topic, request.audience
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::generation_failed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generation endpoint returned {}", status);
            return Err(Error::generation_failed(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::generation_failed(format!("failed to read body: {e}")))?;

        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| Error::generation_failed(format!("invalid JSON body: {e}")))?;

        let doc = LessonPlanResponse::from_value(value)
            .map_err(|e| Error::generation_failed(format!("unexpected body: {e}")))?;

        info!("Lesson plan received ({} bytes)", body.len());
        Ok(doc)
    }
}
