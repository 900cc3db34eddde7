//! Status line and hotkey bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the last change, or a hint when nothing has changed yet.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => Line::styled(status.as_str(), Style::new().fg(ACCENT_MINT)),
        None if app.focused.is_none() => Line::styled(
            "Click a field or press Tab to focus it",
            Style::new().fg(TEXT_DIM),
        ),
        None => Line::raw(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the hotkey bar.
pub fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("[Tab]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" next field · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter/Space]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" open/choose · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" move · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" close · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
