//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, scroll, submission, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next(state.has_result());
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous(state.has_result());
            UpdateResult::none()
        }

        Message::FieldChanged { field, value } => {
            submission::handle_field_changed(state, field, value)
        }

        Message::Submit => submission::handle_submit(state),

        Message::GenerationCompleted { response } => {
            submission::handle_generation_completed(state, *response)
        }

        Message::GenerationFailed { error } => {
            submission::handle_generation_failed(state, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Notices
        // ─────────────────────────────────────────────────────────
        Message::ShowNotice(notice) => {
            state.show_notice(notice);
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.dismiss_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
    }
}
