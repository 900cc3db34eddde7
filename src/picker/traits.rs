//! Picker trait definition
//!
//! A generic trait for list components with a highlighted row.

/// A list with one highlighted row.
///
/// Movement is clamped to the list bounds: stepping past either end leaves
/// the highlight where it is.
///
/// # Example
///
/// ```ignore
/// struct MyList {
///     items: Vec<String>,
///     highlighted: usize,
/// }
///
/// impl Picker for MyList {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn highlighted_index(&self) -> usize {
///         self.highlighted
///     }
///
///     fn set_highlighted_index(&mut self, index: usize) {
///         self.highlighted = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the highlighted index
    fn highlighted_index(&self) -> usize;

    /// Set the highlighted index
    fn set_highlighted_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Highlight the next item (stays on the last one)
    fn highlight_next(&mut self) {
        let next = self.highlighted_index() + 1;
        if next < self.len() {
            self.set_highlighted_index(next);
        }
    }

    /// Highlight the previous item (stays on the first one)
    fn highlight_prev(&mut self) {
        if let Some(prev) = self.highlighted_index().checked_sub(1) {
            self.set_highlighted_index(prev);
        }
    }

    /// Get the highlighted item
    fn highlighted_item(&self) -> Option<&Self::Item> {
        self.items().get(self.highlighted_index())
    }

    /// Highlight a specific index; out-of-range indices are ignored
    fn highlight_index(&mut self, index: usize) {
        if index < self.len() {
            self.set_highlighted_index(index);
        }
    }

    /// Reset the highlight to the first item
    fn reset_highlight(&mut self) {
        self.set_highlighted_index(0);
    }
}
