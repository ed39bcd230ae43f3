//! Form editing, submission and generation result handlers

use lplan_core::prelude::*;
use lplan_core::{FormField, LessonPlanResponse, Notice};

use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

pub fn handle_field_changed(state: &mut AppState, field: FormField, value: String) -> UpdateResult {
    state.form.set(field, value);
    UpdateResult::none()
}

/// Validate the form and, when complete, start one generation request.
///
/// A blocked submit keeps the previous result and moves focus to the first
/// missing field.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let missing = state.form.missing_required();
    if let Some(first) = missing.first().copied() {
        let err = Error::missing_required(missing);
        debug!("Submit blocked: {}", err);
        state.validation_hint = Some(err.to_string());
        state.focus = Focus::Field(first);
        return UpdateResult::none();
    }

    let request = state.form.to_request();
    info!(
        "Generating lesson plan (topic={:?}, audience={:?}, duration={:?})",
        request.topic, request.audience, request.duration
    );

    state.result = None;
    state.validation_hint = None;
    state.loading = true;
    state.spinner_frame = 0;
    state.plan_view.reset();
    if state.focus == Focus::Results {
        state.focus = Focus::SubmitButton;
    }

    UpdateResult::action(UpdateAction::GeneratePlan { request })
}

pub fn handle_generation_completed(
    state: &mut AppState,
    response: LessonPlanResponse,
) -> UpdateResult {
    info!("Lesson plan ready");
    state.loading = false;
    state.result = Some(response);
    state.plan_view.reset();
    UpdateResult::none()
}

/// The failure reason goes to the log; the user only sees the generic notice.
pub fn handle_generation_failed(state: &mut AppState, error: &str) -> UpdateResult {
    error!("Lesson plan generation failed: {}", error);
    state.loading = false;
    state.result = None;
    UpdateResult::action(UpdateAction::Notify(Notice::generation_failed()))
}
