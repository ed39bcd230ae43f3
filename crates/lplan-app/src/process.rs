//! Message processing
//!
//! Runs a message through the TEA update loop, following up messages until
//! there are none and dispatching every action on the way.

use std::sync::Arc;

use lplan_client::PlanGenerator;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::notify::Notifier;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    generator: &Arc<G>,
    notifier: &dyn Notifier,
) where
    G: PlanGenerator + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), generator.clone(), notifier);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::notify::RecordingNotifier;
    use lplan_client::test_utils::MockPlanGenerator;
    use lplan_core::{FormField, FormValues, LessonPlanResponse};
    use serde_json::json;

    fn filled_state() -> AppState {
        AppState::new().with_form(
            FormValues::new()
                .with(FormField::Topic, "Sistema Solar")
                .with(FormField::Audience, "5º ano")
                .with(FormField::Duration, "50 minutos"),
        )
    }

    /// Feed one message and then every message the background task sends
    /// back, until the request has settled.
    async fn run_until_idle(
        state: &mut AppState,
        first: Message,
        generator: &Arc<MockPlanGenerator>,
        notifier: &RecordingNotifier,
    ) {
        let (tx, mut rx) = mpsc::channel(8);
        process_message(state, first, &tx, generator, notifier);
        while state.loading {
            let msg = rx.recv().await.expect("generation result");
            process_message(state, msg, &tx, generator, notifier);
        }
    }

    #[tokio::test]
    async fn test_valid_submit_sends_exactly_one_request() {
        let doc = LessonPlanResponse::from_value(json!({"habilidades_bncc": ["A", "B"]})).unwrap();
        let generator = Arc::new(MockPlanGenerator::responding(doc.clone()));
        let notifier = RecordingNotifier::new();
        let mut state = filled_state();

        run_until_idle(&mut state, Message::Submit, &generator, &notifier).await;

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], state.form.to_request());
        assert_eq!(state.result, Some(doc));
        assert!(!state.loading);
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_enter_key_submits_through_key_handler() {
        let generator = Arc::new(MockPlanGenerator::responding(LessonPlanResponse::default()));
        let notifier = RecordingNotifier::new();
        let mut state = filled_state();

        run_until_idle(
            &mut state,
            Message::Key(InputKey::Enter),
            &generator,
            &notifier,
        )
        .await;

        assert_eq!(generator.call_count(), 1);
        assert!(state.has_result());
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let generator = Arc::new(MockPlanGenerator::responding(LessonPlanResponse::default()));
        let notifier = RecordingNotifier::new();
        let mut state = filled_state();
        state.form.set(FormField::Audience, "");

        run_until_idle(&mut state, Message::Submit, &generator, &notifier).await;

        assert_eq!(generator.call_count(), 0);
        assert!(!state.loading);
        assert!(state.validation_hint.is_some());
    }

    #[tokio::test]
    async fn test_failure_notifies_once_and_clears_loading() {
        let generator = Arc::new(MockPlanGenerator::failing("HTTP 500"));
        let notifier = RecordingNotifier::new();
        let mut state = filled_state();

        run_until_idle(&mut state, Message::Submit, &generator, &notifier).await;

        assert!(!state.loading);
        assert!(state.result.is_none());
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Failed to generate lesson plan.");
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_succeeds() {
        let notifier = RecordingNotifier::new();
        let mut state = filled_state();

        let failing = Arc::new(MockPlanGenerator::failing("connection refused"));
        run_until_idle(&mut state, Message::Submit, &failing, &notifier).await;

        let working = Arc::new(MockPlanGenerator::responding(LessonPlanResponse::default()));
        run_until_idle(&mut state, Message::Submit, &working, &notifier).await;

        assert!(state.has_result());
        assert_eq!(notifier.count(), 1);
    }
}
