//! Key mapping from terminal events to look actions.

use crate::types::LookAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to a look action.
pub fn map_key_code(code: KeyCode) -> Option<LookAction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(LookAction::TiltUp)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(LookAction::TiltDown)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(LookAction::YawLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(LookAction::YawRight)
        }
        _ => None,
    }
}

/// Map keyboard input to look actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LookAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    map_key_code(key.code)
}

/// Check if key should quit the renderer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
