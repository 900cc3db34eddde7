//! Event handling module for keyboard and mouse events.
//!
//! Raw crossterm events are translated into Actions, which the App applies.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
