//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
///
/// Application keys (quit, focus cycling) are resolved here; everything else
/// goes to the focused field, which decides what it means.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    let list_open = app
        .focused_field()
        .map(|f| f.select.is_open())
        .unwrap_or(false);

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,

        // `q` quits only while no list is open
        KeyCode::Char('q') if !list_open => Action::Quit,

        code if app.focused.is_some() => Action::Key(code),

        _ => Action::None,
    }
}
