//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// A left click that lands on no registered region blurs the focused field.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.interactions.contains(x, y) {
                app.interactions.handle_click(x, y)
            } else {
                Action::Blur
            }
        }
        MouseEventKind::Moved => app.interactions.handle_hover(x, y),
        _ => Action::None,
    }
}
