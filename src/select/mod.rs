//! Dropdown selector with single and multiple selection.
//!
//! - `option` - option model and shared option handles
//! - `value` - the caller-owned selection value
//! - `widget` - view state, selection operations and event handlers

mod option;
mod value;
mod widget;

pub use option::{OptionRef, OptionValue, SelectOption};
pub use value::SelectValue;
pub use widget::Select;
