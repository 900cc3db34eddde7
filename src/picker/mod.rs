//! Generic picker module
//!
//! Provides the highlight-navigation trait used by list-based selection
//! components.

mod traits;

pub use traits::Picker;
