use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use super::components::*;
use super::theme::*;

/// Widest a field is drawn.
const MAX_FIELD_WIDTH: u16 = 60;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.interactions.clear();
    let area = frame.area();

    // Header, fields, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, main_layout[0]);

    let content = main_layout[1];
    let width = content.width.min(MAX_FIELD_WIDTH);

    // Scroll the field column so the focused field is on screen
    let fits = ((content.height + 1) / (FIELD_HEIGHT + 1)) as usize;
    let focused = app.focused.unwrap_or(0);
    let first = if fits > 0 && focused >= fits {
        focused - fits + 1
    } else {
        0
    };

    let mut anchors: Vec<(usize, Rect)> = Vec::with_capacity(fits);
    let mut y = content.y;
    for (idx, field) in app.fields.iter().enumerate().skip(first).take(fits) {
        let rect = Rect::new(content.x + 1, y, width.saturating_sub(1), FIELD_HEIGHT);
        render_select_field(frame, rect, field, idx, &mut app.interactions);
        anchors.push((idx, rect));
        y += FIELD_HEIGHT + 1;
    }

    // Open list last so it draws over the fields below it
    let list_bounds = Rect::new(area.x, content.y, area.width, content.height + 1);
    for (idx, anchor) in anchors {
        render_select_options(
            frame,
            anchor,
            list_bounds,
            &mut app.fields[idx],
            idx,
            &mut app.interactions,
        );
    }

    render_status(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("pickbox", Style::new().fg(ACCENT_BLUE).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
