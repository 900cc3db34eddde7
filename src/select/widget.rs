//! The selector widget and its open/closed state machine.
//!
//! `Select` owns only view state: whether the list is open, which row is
//! highlighted and whether the container has keyboard focus. The selected
//! value belongs to the caller and is passed in by reference; every change
//! goes out through the `on_change` callback.

use std::rc::Rc;

use crossterm::event::KeyCode;

use crate::picker::Picker;

use super::{OptionRef, SelectValue};

const DEFAULT_PLACEHOLDER: &str = "Select...";

/// View state owned by the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SelectState {
    is_open: bool,
    highlighted: usize,
    focused: bool,
    /// First list row drawn when the list is taller than its area.
    scroll_offset: usize,
}

/// Dropdown selector over a fixed list of options.
#[derive(Debug, Clone)]
pub struct Select {
    options: Vec<OptionRef>,
    placeholder: String,
    state: SelectState,
}

impl Select {
    pub fn new(options: Vec<OptionRef>) -> Self {
        Self {
            options,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            state: SelectState::default(),
        }
    }

    /// Set the text shown when nothing is selected.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn options(&self) -> &[OptionRef] {
        &self.options
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    pub fn highlighted(&self) -> usize {
        self.state.highlighted
    }

    pub fn scroll_offset(&self) -> usize {
        self.state.scroll_offset
    }

    /// Move the scroll offset just enough to keep the highlighted row among
    /// `visible` rows, and return it.
    pub fn scroll_to_highlight(&mut self, visible: usize) -> usize {
        let highlighted = self.state.highlighted;
        let offset = &mut self.state.scroll_offset;
        if visible == 0 {
            *offset = 0;
        } else if highlighted < *offset {
            *offset = highlighted;
        } else if highlighted >= *offset + visible {
            *offset = highlighted - visible + 1;
        }
        // Never leave blank rows at the bottom
        *offset = (*offset).min(self.options.len().saturating_sub(visible));
        *offset
    }

    // ── Open state ──────────────────────────────────────────────────────────

    /// Open the list. The highlight resets only on a closed → open transition.
    pub fn open(&mut self) {
        if !self.state.is_open {
            self.state.is_open = true;
            self.state.scroll_offset = 0;
            self.reset_highlight();
        }
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn focus(&mut self) {
        self.state.focused = true;
    }

    /// Lose focus; an open list closes.
    pub fn blur(&mut self) {
        self.state.focused = false;
        self.close();
    }

    // ── Selection operations ────────────────────────────────────────────────

    /// Report an empty value of the current mode.
    pub fn clear_options<F>(&self, value: &SelectValue, mut on_change: F)
    where
        F: FnMut(SelectValue),
    {
        on_change(value.cleared());
    }

    /// Toggle `option` in multiple mode, or replace the single value.
    ///
    /// Picking the already selected option in single mode does not call
    /// `on_change`.
    pub fn select_option<F>(&self, value: &SelectValue, option: &OptionRef, mut on_change: F)
    where
        F: FnMut(SelectValue),
    {
        if let Some(next) = value.toggled(option) {
            on_change(next);
        }
    }

    pub fn is_option_selected(&self, value: &SelectValue, option: &OptionRef) -> bool {
        value.contains(option)
    }

    // ── Event handlers ──────────────────────────────────────────────────────

    /// Handle a key press on the container. Returns whether the key was used.
    ///
    /// Keys are ignored unless the container has focus.
    pub fn handle_key<F>(&mut self, code: KeyCode, value: &SelectValue, on_change: F) -> bool
    where
        F: FnMut(SelectValue),
    {
        if !self.state.focused {
            return false;
        }

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.is_open {
                    if let Some(option) = self.highlighted_item().map(Rc::clone) {
                        self.select_option(value, &option, on_change);
                    }
                    self.close();
                } else {
                    self.open();
                }
            }
            KeyCode::Up | KeyCode::Down => {
                if !self.state.is_open {
                    self.open();
                } else if code == KeyCode::Down {
                    self.highlight_next();
                } else {
                    self.highlight_prev();
                }
            }
            KeyCode::Esc => self.close(),
            _ => return false,
        }
        true
    }

    /// Click on the container: focus it and flip the open state.
    pub fn click_container(&mut self) {
        self.focus();
        self.toggle();
    }

    /// Click on a list row: commit that option and close.
    pub fn click_option<F>(&mut self, index: usize, value: &SelectValue, on_change: F)
    where
        F: FnMut(SelectValue),
    {
        if let Some(option) = self.options.get(index).map(Rc::clone) {
            self.select_option(value, &option, on_change);
        }
        self.close();
    }

    /// Click on a badge's remove affordance. Does not change the open state.
    pub fn click_badge<F>(&mut self, index: usize, value: &SelectValue, on_change: F)
    where
        F: FnMut(SelectValue),
    {
        self.focus();
        if let Some(option) = value.selected().get(index).map(Rc::clone) {
            self.select_option(value, &option, on_change);
        }
    }

    /// Click on the clear control. Does not change the open state.
    pub fn click_clear<F>(&mut self, value: &SelectValue, on_change: F)
    where
        F: FnMut(SelectValue),
    {
        self.focus();
        self.clear_options(value, on_change);
    }

    /// Pointer entered a list row.
    pub fn hover_option(&mut self, index: usize) {
        self.highlight_index(index);
    }
}

impl Picker for Select {
    type Item = OptionRef;

    fn items(&self) -> &[Self::Item] {
        &self.options
    }

    fn highlighted_index(&self) -> usize {
        self.state.highlighted
    }

    fn set_highlighted_index(&mut self, index: usize) {
        self.state.highlighted = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{OptionValue, SelectOption};

    fn abc() -> Vec<OptionRef> {
        vec![
            SelectOption::new("A", OptionValue::Integer(1)).into_ref(),
            SelectOption::new("B", OptionValue::Integer(2)).into_ref(),
            SelectOption::new("C", OptionValue::Integer(3)).into_ref(),
        ]
    }

    /// Runs `f` with a recording callback and returns every reported value.
    fn record<R>(f: impl FnOnce(&mut dyn FnMut(SelectValue)) -> R) -> (R, Vec<SelectValue>) {
        let mut calls = Vec::new();
        let result = f(&mut |v: SelectValue| calls.push(v));
        (result, calls)
    }

    #[test]
    fn test_single_keyboard_scenario() {
        let o = abc();
        let mut select = Select::new(o.clone());
        let value = SelectValue::Single(None);

        select.click_container();
        assert!(select.is_open());
        assert_eq!(select.highlighted(), 0);

        let (_, calls) = record(|cb| select.handle_key(KeyCode::Down, &value, cb));
        assert!(calls.is_empty());
        assert_eq!(select.highlighted(), 1);

        let (handled, calls) = record(|cb| select.handle_key(KeyCode::Enter, &value, cb));
        assert!(handled);
        assert_eq!(calls, vec![SelectValue::Single(Some(o[1].clone()))]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_open_resets_highlight() {
        let mut select = Select::new(abc());
        select.focus();
        select.open();
        select.hover_option(2);
        assert_eq!(select.highlighted(), 2);

        select.close();
        select.open();
        assert_eq!(select.highlighted(), 0);

        // Arrow key while closed opens without moving.
        select.close();
        select.hover_option(1);
        let value = SelectValue::Single(None);
        let (_, calls) = record(|cb| select.handle_key(KeyCode::Down, &value, cb));
        assert!(calls.is_empty());
        assert!(select.is_open());
        assert_eq!(select.highlighted(), 0);
    }

    #[test]
    fn test_arrow_keys_clamp() {
        let mut select = Select::new(abc());
        let value = SelectValue::Single(None);
        select.focus();
        select.open();

        let (_, _) = record(|cb| select.handle_key(KeyCode::Up, &value, cb));
        assert_eq!(select.highlighted(), 0);

        for _ in 0..5 {
            let (_, _) = record(|cb| select.handle_key(KeyCode::Down, &value, cb));
        }
        assert_eq!(select.highlighted(), 2);
    }

    #[test]
    fn test_space_opens_and_commits() {
        let o = abc();
        let mut select = Select::new(o.clone());
        let value = SelectValue::Multiple(vec![]);
        select.focus();

        let (_, calls) = record(|cb| select.handle_key(KeyCode::Char(' '), &value, cb));
        assert!(calls.is_empty());
        assert!(select.is_open());

        let (_, calls) = record(|cb| select.handle_key(KeyCode::Char(' '), &value, cb));
        assert_eq!(calls, vec![SelectValue::Multiple(vec![o[0].clone()])]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_scroll_follows_highlight() {
        let options = (0..10)
            .map(|i| SelectOption::new(format!("Opt{i}"), OptionValue::Integer(i)).into_ref())
            .collect();
        let mut select = Select::new(options);
        let value = SelectValue::Single(None);
        select.focus();
        select.open();

        for _ in 0..8 {
            let (_, _) = record(|cb| select.handle_key(KeyCode::Down, &value, cb));
        }
        assert_eq!(select.scroll_to_highlight(5), 4);

        // Moving back up inside the window keeps it still
        select.hover_option(5);
        assert_eq!(select.scroll_to_highlight(5), 4);

        select.hover_option(1);
        assert_eq!(select.scroll_to_highlight(5), 1);

        // A taller area never scrolls past the last option
        select.hover_option(9);
        assert_eq!(select.scroll_to_highlight(5), 5);
        assert_eq!(select.scroll_to_highlight(8), 2);

        select.close();
        select.open();
        assert_eq!(select.scroll_offset(), 0);
    }

    #[test]
    fn test_escape_closes() {
        let mut select = Select::new(abc());
        let value = SelectValue::Single(None);
        select.focus();
        select.open();

        let (handled, _) = record(|cb| select.handle_key(KeyCode::Esc, &value, cb));
        assert!(handled);
        assert!(!select.is_open());
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut select = Select::new(abc());
        let value = SelectValue::Single(None);

        let (handled, calls) = record(|cb| select.handle_key(KeyCode::Enter, &value, cb));
        assert!(!handled);
        assert!(calls.is_empty());
        assert!(!select.is_open());
    }

    #[test]
    fn test_unrelated_key_not_handled() {
        let mut select = Select::new(abc());
        let value = SelectValue::Single(None);
        select.focus();

        let (handled, _) = record(|cb| select.handle_key(KeyCode::Char('x'), &value, cb));
        assert!(!handled);
    }

    #[test]
    fn test_single_reselect_is_silent() {
        let o = abc();
        let mut select = Select::new(o.clone());
        let value = SelectValue::Single(Some(o[0].clone()));
        select.focus();
        select.open();

        let (_, calls) = record(|cb| select.handle_key(KeyCode::Enter, &value, cb));
        assert!(calls.is_empty());
        assert!(!select.is_open());
    }

    #[test]
    fn test_enter_with_no_options_just_closes() {
        let mut select = Select::new(vec![]);
        let value = SelectValue::Multiple(vec![]);
        select.focus();
        select.open();

        let (_, calls) = record(|cb| select.handle_key(KeyCode::Enter, &value, cb));
        assert!(calls.is_empty());
        assert!(!select.is_open());
    }

    #[test]
    fn test_badge_click_removes_without_toggling() {
        let o = abc();
        let mut select = Select::new(o.clone());
        let value = SelectValue::Multiple(vec![o[0].clone()]);

        let (_, calls) = record(|cb| select.click_badge(0, &value, cb));
        assert_eq!(calls, vec![SelectValue::Multiple(vec![])]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_clear_control() {
        let o = abc();
        let mut select = Select::new(o.clone());
        select.click_container();

        let multi = SelectValue::Multiple(vec![o[0].clone(), o[1].clone()]);
        let (_, calls) = record(|cb| select.click_clear(&multi, cb));
        assert_eq!(calls, vec![SelectValue::Multiple(vec![])]);

        let single = SelectValue::Single(Some(o[0].clone()));
        let (_, calls) = record(|cb| select.click_clear(&single, cb));
        assert_eq!(calls, vec![SelectValue::Single(None)]);

        // The list stays open.
        assert!(select.is_open());
    }

    #[test]
    fn test_click_option_commits_and_closes() {
        let o = abc();
        let mut select = Select::new(o.clone());
        let value = SelectValue::Multiple(vec![o[2].clone()]);
        select.click_container();

        let (_, calls) = record(|cb| select.click_option(2, &value, cb));
        assert_eq!(calls, vec![SelectValue::Multiple(vec![])]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_container_click_toggles_and_blur_closes() {
        let mut select = Select::new(abc());
        select.click_container();
        assert!(select.is_open());
        assert!(select.is_focused());

        select.click_container();
        assert!(!select.is_open());

        select.click_container();
        select.blur();
        assert!(!select.is_open());
        assert!(!select.is_focused());
    }

    #[test]
    fn test_hover_tracks_highlight() {
        let mut select = Select::new(abc());
        select.click_container();
        select.hover_option(1);
        assert_eq!(select.highlighted(), 1);

        select.hover_option(7);
        assert_eq!(select.highlighted(), 1);
    }

    #[test]
    fn test_is_option_selected() {
        let o = abc();
        let select = Select::new(o.clone());
        let value = SelectValue::Multiple(vec![o[1].clone()]);
        assert!(select.is_option_selected(&value, &o[1]));
        assert!(!select.is_option_selected(&value, &o[0]));
    }
}
