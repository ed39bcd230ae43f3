//! Key event handlers for different UI modes

use lplan_core::FormField;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Notice => handle_key_notice(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// The notice is modal: only dismissal (or a hard quit) gets through
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissNotice),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc => return Some(Message::RequestQuit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::Field(field) => handle_key_field(state, field, key),
        Focus::SubmitButton => handle_key_submit_button(state, key),
        Focus::Results => handle_key_results(key),
    }
}

fn handle_key_field(state: &AppState, field: FormField, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut value = state.form.get(field).to_string();
            value.push(c);
            Some(Message::FieldChanged { field, value })
        }
        InputKey::Backspace => {
            let mut value = state.form.get(field).to_string();
            value.pop()?;
            Some(Message::FieldChanged { field, value })
        }
        InputKey::CharCtrl('u') => Some(Message::FieldChanged {
            field,
            value: String::new(),
        }),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        InputKey::Enter => submit_unless_loading(state),
        _ => None,
    }
}

fn handle_key_submit_button(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => submit_unless_loading(state),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}

fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// The submit control is disabled while a request is in flight
fn submit_unless_loading(state: &AppState) -> Option<Message> {
    (!state.loading).then_some(Message::Submit)
}
