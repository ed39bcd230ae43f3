//! User notification capability
//!
//! The update loop never shows anything itself: a failure produces
//! [`UpdateAction::Notify`](crate::UpdateAction::Notify) and the event loop
//! hands the notice to whichever [`Notifier`] it was built with.

use std::sync::{Mutex, PoisonError};

use lplan_core::prelude::*;
use lplan_core::Notice;
use tokio::sync::mpsc;

use crate::message::Message;

/// Something that can put a notice in front of the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Opens the TUI notice dialog by feeding `Message::ShowNotice` back into
/// the event loop.
#[derive(Debug, Clone)]
pub struct ModalNotifier {
    msg_tx: mpsc::Sender<Message>,
}

impl ModalNotifier {
    pub fn new(msg_tx: mpsc::Sender<Message>) -> Self {
        Self { msg_tx }
    }
}

impl Notifier for ModalNotifier {
    fn notify(&self, notice: Notice) {
        if let Err(e) = self.msg_tx.try_send(Message::ShowNotice(notice)) {
            warn!("Failed to queue notice: {}", e);
        }
    }
}

/// Prints notices to stderr (headless mode)
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}: {}", notice.title, notice.message);
    }
}

/// Keeps every notice it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
