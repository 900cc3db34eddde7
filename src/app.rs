//! Application state: the fields on screen, their values and focus.
//!
//! The App is the caller of every `Select`: it owns each field's
//! `SelectValue` and replaces it when the widget reports a change.

use serde_json::json;

use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::select::{Select, SelectOption, SelectValue};
use crate::tui::interaction::InteractionRegistry;

/// One labelled selector and the value it displays.
pub struct Field {
    pub title: String,
    pub select: Select,
    pub value: SelectValue,
}

impl Field {
    pub fn new(
        title: impl Into<String>,
        options: Vec<SelectOption>,
        multiple: bool,
        placeholder: &str,
    ) -> Self {
        let options = options.into_iter().map(SelectOption::into_ref).collect();
        Self {
            title: title.into(),
            select: Select::new(options).placeholder(placeholder),
            value: SelectValue::empty(multiple),
        }
    }
}

pub struct App {
    pub fields: Vec<Field>,
    pub focused: Option<usize>,
    pub interactions: InteractionRegistry,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create the app with the first field focused.
    pub fn new(fields: Vec<Field>) -> Self {
        let mut app = Self {
            fields,
            focused: None,
            interactions: InteractionRegistry::new(),
            status: None,
            should_quit: false,
        };
        if !app.fields.is_empty() {
            app.focus(0);
        }
        app
    }

    pub fn from_config(config: &Config) -> Self {
        let placeholder = config.placeholder();
        let fields = config
            .fields()
            .into_iter()
            .map(|f| Field::new(f.title, f.options, f.multiple, placeholder))
            .collect();
        Self::new(fields)
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.focused.and_then(|i| self.fields.get(i))
    }

    // ── Dispatch ─────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) {
        if !matches!(action, Action::None | Action::HighlightOption(..)) {
            log::log_event(&format!("{:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrev => self.cycle_focus(false),
            Action::Blur => self.blur(),
            Action::Key(code) => {
                if let Some(idx) = self.focused {
                    self.update(idx, |select, value, on_change| {
                        select.handle_key(code, value, on_change);
                    });
                }
            }
            Action::ToggleOpen(idx) => {
                self.focus(idx);
                if let Some(field) = self.fields.get_mut(idx) {
                    field.select.click_container();
                }
            }
            Action::ChooseOption(idx, option) => {
                self.update(idx, |select, value, on_change| {
                    select.click_option(option, value, on_change);
                });
            }
            Action::HighlightOption(idx, option) => {
                if let Some(field) = self.fields.get_mut(idx) {
                    field.select.hover_option(option);
                }
            }
            Action::RemoveBadge(idx, badge) => {
                self.focus(idx);
                self.update(idx, |select, value, on_change| {
                    select.click_badge(badge, value, on_change);
                });
            }
            Action::Clear(idx) => {
                self.focus(idx);
                self.update(idx, |select, value, on_change| {
                    select.click_clear(value, on_change);
                });
            }
            Action::None => {}
        }
    }

    /// Run a widget operation against field `idx` and store any reported value.
    fn update<F>(&mut self, idx: usize, f: F)
    where
        F: FnOnce(&mut Select, &SelectValue, &mut dyn FnMut(SelectValue)),
    {
        let Some(field) = self.fields.get_mut(idx) else {
            return;
        };

        let mut changed = None;
        f(&mut field.select, &field.value, &mut |next: SelectValue| changed = Some(next));

        if let Some(next) = changed {
            let summary = next.describe();
            log::log(&format!("{} changed: {}", field.title, summary));
            self.status = Some(format!("{} → {}", field.title, summary));
            field.value = next;
        }
    }

    // ── Focus ────────────────────────────────────────────────────────────────

    /// Focus field `idx`, blurring whichever field had focus before.
    fn focus(&mut self, idx: usize) {
        if idx >= self.fields.len() {
            return;
        }
        if self.focused != Some(idx) {
            self.blur();
        }
        self.fields[idx].select.focus();
        self.focused = Some(idx);
    }

    fn blur(&mut self) {
        if let Some(field) = self.focused.take().and_then(|i| self.fields.get_mut(i)) {
            field.select.blur();
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        let next = match (self.focused, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => i.checked_sub(1).unwrap_or(len - 1),
        };
        self.focus(next);
    }

    // ── Output ───────────────────────────────────────────────────────────────

    /// Final values, one object per field.
    pub fn report(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.fields
                .iter()
                .map(|f| json!({ "field": f.title, "value": f.value }))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    use crate::select::OptionValue;

    fn abc() -> Vec<SelectOption> {
        vec![
            SelectOption::new("A", OptionValue::Integer(1)),
            SelectOption::new("B", OptionValue::Integer(2)),
            SelectOption::new("C", OptionValue::Integer(3)),
        ]
    }

    fn app() -> App {
        App::new(vec![
            Field::new("Single", abc(), false, "Select..."),
            Field::new("Multiple", abc(), true, "Select..."),
        ])
    }

    #[test]
    fn test_first_field_focused() {
        let app = app();
        assert_eq!(app.focused, Some(0));
        assert!(app.fields[0].select.is_focused());
        assert!(!app.fields[1].select.is_focused());
    }

    #[test]
    fn test_single_scenario() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(0));
        assert!(app.fields[0].select.is_open());
        assert_eq!(app.fields[0].select.highlighted(), 0);

        app.dispatch(Action::Key(KeyCode::Down));
        assert_eq!(app.fields[0].select.highlighted(), 1);

        app.dispatch(Action::Key(KeyCode::Enter));
        assert_eq!(app.fields[0].value.describe(), "B");
        assert!(!app.fields[0].select.is_open());
        assert_eq!(app.status.as_deref(), Some("Single → B"));
    }

    #[test]
    fn test_multiple_scenario() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(1));
        app.dispatch(Action::ChooseOption(1, 0));
        assert_eq!(app.fields[1].value.describe(), "A");

        app.dispatch(Action::RemoveBadge(1, 0));
        assert!(app.fields[1].value.is_empty());
        assert!(app.fields[1].value.is_multiple());
    }

    #[test]
    fn test_clear() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(1));
        app.dispatch(Action::ChooseOption(1, 0));
        app.dispatch(Action::ToggleOpen(1));
        app.dispatch(Action::ChooseOption(1, 1));
        assert_eq!(app.fields[1].value.describe(), "A, B");

        app.dispatch(Action::Clear(1));
        assert_eq!(app.fields[1].value, SelectValue::Multiple(vec![]));

        app.dispatch(Action::ToggleOpen(0));
        app.dispatch(Action::ChooseOption(0, 0));
        app.dispatch(Action::Clear(0));
        assert_eq!(app.fields[0].value, SelectValue::Single(None));
    }

    #[test]
    fn test_focus_moves_and_blurs() {
        let mut app = app();
        app.dispatch(Action::Key(KeyCode::Enter));
        assert!(app.fields[0].select.is_open());

        app.dispatch(Action::FocusNext);
        assert_eq!(app.focused, Some(1));
        assert!(!app.fields[0].select.is_open());
        assert!(!app.fields[0].select.is_focused());

        app.dispatch(Action::FocusNext);
        assert_eq!(app.focused, Some(0));

        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focused, Some(1));
    }

    #[test]
    fn test_click_other_container_blurs_previous() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(0));
        app.dispatch(Action::ToggleOpen(1));
        assert!(!app.fields[0].select.is_open());
        assert!(app.fields[1].select.is_open());
        assert_eq!(app.focused, Some(1));
    }

    #[test]
    fn test_blur_ignores_keys() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(0));
        app.dispatch(Action::Blur);
        assert!(!app.fields[0].select.is_open());
        assert_eq!(app.focused, None);

        app.dispatch(Action::Key(KeyCode::Enter));
        assert!(!app.fields[0].select.is_open());
    }

    #[test]
    fn test_hover_sets_highlight() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(0));
        app.dispatch(Action::HighlightOption(0, 2));
        assert_eq!(app.fields[0].select.highlighted(), 2);
    }

    #[test]
    fn test_single_reselect_keeps_status() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(0));
        app.dispatch(Action::ChooseOption(0, 0));
        app.status = None;

        app.dispatch(Action::ToggleOpen(0));
        app.dispatch(Action::ChooseOption(0, 0));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_report() {
        let mut app = app();
        app.dispatch(Action::ToggleOpen(1));
        app.dispatch(Action::ChooseOption(1, 2));

        let report = app.report();
        assert_eq!(report[0]["field"], "Single");
        assert!(report[0]["value"].is_null());
        assert_eq!(report[1]["value"][0]["label"], "C");
        assert_eq!(report[1]["value"][0]["value"], 3);
    }
}
