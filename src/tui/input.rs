//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The same key means different things in
//! the table, the form, and the delete prompt, so mapping takes the current
//! [`InputContext`].

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Where key presses are currently directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The mortgage table has focus.
    List,
    /// The form has focus.
    Form,
    /// A delete confirmation prompt is showing.
    ConfirmDelete,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::List => map_list_key(key.key),
        InputContext::Form => map_form_key(key.key),
        InputContext::ConfirmDelete => map_confirm_key(key.key),
    }
}

const fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('e') | KeyCode::Enter => Some(AppMsg::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(AppMsg::DeleteRequested),
        KeyCode::Char('n') | KeyCode::Tab => Some(AppMsg::StartNew),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

const fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::FocusNextField),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::FocusPreviousField),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => Some(AppMsg::ToggleOption),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Enter => Some(AppMsg::SubmitForm),
        KeyCode::Esc => Some(AppMsg::CancelForm),
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        _ => None,
    }
}

const fn map_confirm_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('y' | 'Y') => Some(AppMsg::ConfirmDelete(true)),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(AppMsg::ConfirmDelete(false)),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        _ => None,
    }
}
