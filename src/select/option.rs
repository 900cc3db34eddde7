//! Option model shared between the widget and its caller.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared handle to an option.
///
/// Selection membership compares handles with `Rc::ptr_eq`, so two options
/// built separately with the same label and value are still distinct.
pub type OptionRef = Rc<SelectOption>;

/// The value carried by an option: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    /// Parse a command-line value, preferring numbers over text.
    pub fn parse(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            OptionValue::Integer(n)
        } else if let Ok(f) = raw.parse::<f64>() {
            OptionValue::Float(f)
        } else {
            OptionValue::Text(raw.to_string())
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(n) => write!(f, "{}", n),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: OptionValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Wrap into a shared handle.
    pub fn into_ref(self) -> OptionRef {
        Rc::new(self)
    }
}
