//! Headless mode runner
//!
//! Drives a single submission through [`process_message`] and waits on the
//! message channel until the loading flag drops.

use std::sync::Arc;

use lplan_app::config::Settings;
use lplan_app::{process_message, AppState, Message, Notifier};
use lplan_client::PlanGenerator;
use lplan_core::prelude::*;
use lplan_core::{FormField, FormValues, LessonPlanResponse};
use tokio::sync::mpsc;

/// How a headless submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessOutcome {
    /// The endpoint returned a plan
    Generated(LessonPlanResponse),
    /// Submission was blocked; no request was sent
    Invalid(Vec<FormField>),
    /// The request failed; the notice went to the notifier
    Failed,
}

impl HeadlessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HeadlessOutcome::Generated(_))
    }
}

/// Submit `form` once and wait for the outcome
pub async fn run_headless<G>(
    form: FormValues,
    settings: Settings,
    generator: Arc<G>,
    notifier: &dyn Notifier,
) -> Result<HeadlessOutcome>
where
    G: PlanGenerator + Sync + 'static,
{
    info!("Headless submission to {}", settings.endpoint.url);

    let mut state = AppState::with_settings(settings).with_form(form);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);

    process_message(&mut state, Message::Submit, &msg_tx, &generator, notifier);

    if !state.loading {
        let missing = state.form.missing_required();
        warn!("Headless submission blocked: {:?}", missing);
        return Ok(HeadlessOutcome::Invalid(missing));
    }

    while state.loading {
        let msg = msg_rx.recv().await.ok_or(Error::ChannelClosed)?;
        process_message(&mut state, msg, &msg_tx, &generator, notifier);
    }

    Ok(match state.result.take() {
        Some(doc) => HeadlessOutcome::Generated(doc),
        None => HeadlessOutcome::Failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lplan_app::RecordingNotifier;
    use lplan_client::test_utils::MockPlanGenerator;
    use serde_json::json;

    fn complete_form() -> FormValues {
        FormValues::new()
            .with(FormField::Topic, "Ciclo da água")
            .with(FormField::Audience, "6º ano")
            .with(FormField::Duration, "50 minutos")
    }

    #[tokio::test]
    async fn test_generated_plan_is_returned() {
        let doc = LessonPlanResponse::from_value(json!({"habilidades_bncc": ["EF06CI01"]})).unwrap();
        let generator = Arc::new(MockPlanGenerator::responding(doc.clone()));
        let notifier = RecordingNotifier::new();

        let outcome = run_headless(complete_form(), Settings::default(), generator.clone(), &notifier)
            .await
            .unwrap();

        assert_eq!(outcome, HeadlessOutcome::Generated(doc));
        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.calls()[0].topic, "Ciclo da água");
        assert_eq!(generator.calls()[0].objectives, "");
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_send_nothing() {
        let generator = Arc::new(MockPlanGenerator::responding(LessonPlanResponse::default()));
        let notifier = RecordingNotifier::new();
        let form = FormValues::new().with(FormField::Audience, "6º ano");

        let outcome = run_headless(form, Settings::default(), generator.clone(), &notifier)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            HeadlessOutcome::Invalid(vec![FormField::Topic, FormField::Duration])
        );
        assert_eq!(generator.call_count(), 0);
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_failure_notifies_once() {
        let generator = Arc::new(MockPlanGenerator::failing("HTTP 500"));
        let notifier = RecordingNotifier::new();

        let outcome = run_headless(complete_form(), Settings::default(), generator, &notifier)
            .await
            .unwrap();

        assert_eq!(outcome, HeadlessOutcome::Failed);
        assert_eq!(notifier.count(), 1);
        let notices = notifier.notices();
        assert!(notices[0].is_error());
        assert_eq!(notices[0].message, "Failed to generate lesson plan.");
    }
}
