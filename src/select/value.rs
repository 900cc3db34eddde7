//! The caller-owned selection value.

use std::rc::Rc;

use serde::{Serialize, Serializer};

use super::OptionRef;

/// Current selection, shaped by mode.
///
/// The widget never stores this; it receives it by reference and reports
/// replacements through its change callback.
#[derive(Debug, Clone)]
pub enum SelectValue {
    /// At most one option.
    Single(Option<OptionRef>),
    /// Distinct options in the order they were picked.
    Multiple(Vec<OptionRef>),
}

impl SelectValue {
    /// An empty value for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            SelectValue::Multiple(Vec::new())
        } else {
            SelectValue::Single(None)
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, SelectValue::Multiple(_))
    }

    /// Selected options as a slice (zero or one entry in single mode).
    pub fn selected(&self) -> &[OptionRef] {
        match self {
            SelectValue::Single(option) => option.as_slice(),
            SelectValue::Multiple(options) => options,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected().is_empty()
    }

    /// Membership by reference.
    pub fn contains(&self, option: &OptionRef) -> bool {
        self.selected().iter().any(|o| Rc::ptr_eq(o, option))
    }

    /// The empty value of the same mode.
    pub fn cleared(&self) -> Self {
        Self::empty(self.is_multiple())
    }

    /// The value after picking `option`, or `None` when nothing changes.
    ///
    /// Multiple mode toggles membership, appending new picks at the end.
    /// Single mode replaces the value unless `option` is already selected.
    pub fn toggled(&self, option: &OptionRef) -> Option<Self> {
        match self {
            SelectValue::Multiple(options) => {
                let next = if self.contains(option) {
                    options
                        .iter()
                        .filter(|o| !Rc::ptr_eq(o, option))
                        .cloned()
                        .collect()
                } else {
                    let mut next = options.clone();
                    next.push(Rc::clone(option));
                    next
                };
                Some(SelectValue::Multiple(next))
            }
            SelectValue::Single(_) if self.contains(option) => None,
            SelectValue::Single(_) => Some(SelectValue::Single(Some(Rc::clone(option)))),
        }
    }

    /// Human-readable summary for the status line.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }
        self.selected()
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for SelectValue {
    fn eq(&self, other: &Self) -> bool {
        self.is_multiple() == other.is_multiple()
            && self.selected().len() == other.selected().len()
            && self
                .selected()
                .iter()
                .zip(other.selected())
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}

impl Serialize for SelectValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectValue::Single(option) => option.as_deref().serialize(serializer),
            SelectValue::Multiple(options) => {
                serializer.collect_seq(options.iter().map(|o| o.as_ref()))
            }
        }
    }
}
