//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; the App applies them to its fields.

use crossterm::event::KeyCode;

/// Actions that can be dispatched from event handlers.
///
/// Field-scoped actions carry the index of the field they target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Focus ===
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,
    /// Drop focus from the focused field (click outside)
    Blur,

    // === Keyboard ===
    /// Key pressed while a field has focus
    Key(KeyCode),

    // === Pointer ===
    /// Click on a field's container
    ToggleOpen(usize),
    /// Click on an option row (field, option)
    ChooseOption(usize, usize),
    /// Pointer entered an option row (field, option)
    HighlightOption(usize, usize),
    /// Click on a badge (field, position in the value)
    RemoveBadge(usize, usize),
    /// Click on the clear control
    Clear(usize),

    /// No action
    None,
}
