//! Key event handlers

use crate::carousel::Nav;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};

/// Convert key events to messages based on current phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.phase {
        AppPhase::Initializing | AppPhase::Quitting => handle_key_inactive(key),
        AppPhase::Running => handle_key_running(state, key),
    }
}

/// Only quitting is possible before the deck is mounted
fn handle_key_inactive(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_running(state: &AppState, key: InputKey) -> Option<Message> {
    let id = state.focus;
    let navigate = |nav| Some(Message::Navigate { id, nav });

    if let Some(dot) = key.dot_index() {
        return navigate(Nav::GoTo(dot));
    }

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Focus
        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrev),

        // Navigation of the focused carousel
        InputKey::Left | InputKey::Char('h') => navigate(Nav::Prev),
        InputKey::Right | InputKey::Char('l') => navigate(Nav::Next),
        InputKey::Home => navigate(Nav::First),
        InputKey::End => navigate(Nav::Last),

        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleAutoPlay(id)),
        InputKey::Char('r') => Some(Message::ReloadContent),

        _ => None,
    }
}
