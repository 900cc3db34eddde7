//! UI components for the TUI.
//!
//! - `select` - selector value row and option list
//! - `status_bar` - last-change status line and hotkey bar

mod select;
mod status_bar;

pub use select::{FIELD_HEIGHT, render_select_field, render_select_options};
pub use status_bar::{render_hotkeys, render_status};
