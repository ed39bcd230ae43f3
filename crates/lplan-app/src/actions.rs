//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use lplan_client::PlanGenerator;
use lplan_core::prelude::*;
use lplan_core::LessonPlanRequest;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::notify::Notifier;
use crate::UpdateAction;

/// Execute an action returned by `update`
pub fn handle_action<G>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    generator: Arc<G>,
    notifier: &dyn Notifier,
) where
    G: PlanGenerator + Sync + 'static,
{
    match action {
        UpdateAction::GeneratePlan { request } => {
            spawn_generation(request, generator, msg_tx);
        }

        UpdateAction::Notify(notice) => notifier.notify(notice),
    }
}

/// Run one generation request in the background and report the outcome as
/// `GenerationCompleted` or `GenerationFailed`.
pub fn spawn_generation<G>(
    request: LessonPlanRequest,
    generator: Arc<G>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    G: PlanGenerator + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match generator.generate(&request).await {
            Ok(doc) => Message::GenerationCompleted {
                response: Box::new(doc),
            },
            Err(e) => Message::GenerationFailed {
                error: failure_reason(&e),
            },
        };

        if msg_tx.send(message).await.is_err() {
            debug!("Event loop gone before generation finished");
        }
    })
}

fn failure_reason(err: &Error) -> String {
    match err {
        Error::GenerationFailed { reason } => reason.clone(),
        other => other.to_string(),
    }
}
