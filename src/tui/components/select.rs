//! Selector component: the value row and its option list.
//!
//! The value row is a bordered box holding either the selected label
//! (single mode) or a row of removable badges (multiple mode), followed by
//! the clear control, a divider and the caret. The option list is drawn in a
//! second pass so it can overlap the fields below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::Field;
use crate::events::Action;
use crate::select::{OptionRef, SelectValue};
use crate::tui::interaction::{
    CONTAINER_PRIORITY, CONTROL_PRIORITY, ClickRegion, InteractionRegistry, InteractiveRegion,
    LIST_PRIORITY,
};
use crate::tui::theme::*;

/// Rows taken by one field (value row plus borders).
pub const FIELD_HEIGHT: u16 = 3;

/// Width of `" × │ ▾"` at the right end of the value row.
const CONTROLS_WIDTH: u16 = 6;

/// Render a field's container and register its click regions.
pub fn render_select_field(
    frame: &mut Frame,
    area: Rect,
    field: &Field,
    field_idx: usize,
    interactions: &mut InteractionRegistry,
) {
    let select = &field.select;
    let border_color = if select.is_focused() { ACCENT_BLUE } else { BORDER_IDLE };

    let block = Block::default()
        .title(format!(" {} ", field.title))
        .title_style(Style::new().fg(TEXT_DIM))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    interactions.register(
        InteractiveRegion::clickable("select_container", area.into(), Action::ToggleOpen(field_idx))
            .with_priority(CONTAINER_PRIORITY),
    );

    if inner.width <= CONTROLS_WIDTH || inner.height == 0 {
        return;
    }

    let value_area = Rect::new(inner.x, inner.y, inner.width - CONTROLS_WIDTH, 1);
    match &field.value {
        SelectValue::Single(option) => {
            let line = match option {
                Some(option) => Line::styled(option.label.as_str(), Style::new().fg(TEXT_WHITE)),
                None => placeholder_line(select.placeholder_text()),
            };
            frame.render_widget(Paragraph::new(line), value_area);
        }
        SelectValue::Multiple(options) => {
            render_badges(
                frame,
                value_area,
                options,
                select.placeholder_text(),
                field_idx,
                interactions,
            );
        }
    }

    let controls_x = value_area.x + value_area.width;
    let caret = if select.is_open() { "▴" } else { "▾" };
    let controls = Line::from(vec![
        Span::raw(" "),
        Span::styled("×", Style::new().fg(ACCENT_CORAL).bold()),
        Span::raw(" "),
        Span::styled("│", Style::new().fg(BORDER_IDLE)),
        Span::raw(" "),
        Span::styled(caret, Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(
        Paragraph::new(controls),
        Rect::new(controls_x, inner.y, CONTROLS_WIDTH, 1),
    );

    // " × " is the clear control's hit target
    interactions.register(
        InteractiveRegion::clickable(
            "select_clear",
            ClickRegion::new(controls_x, inner.y, 3, 1),
            Action::Clear(field_idx),
        )
        .with_priority(CONTROL_PRIORITY),
    );
}

fn placeholder_line(text: &str) -> Line<'_> {
    Line::styled(text, Style::new().fg(TEXT_DIM).italic())
}

/// Badges that fit the row, then `+N` for the rest.
fn render_badges(
    frame: &mut Frame,
    area: Rect,
    options: &[OptionRef],
    placeholder: &str,
    field_idx: usize,
    interactions: &mut InteractionRegistry,
) {
    if options.is_empty() {
        frame.render_widget(Paragraph::new(placeholder_line(placeholder)), area);
        return;
    }

    let badge_style = Style::new().fg(TEXT_WHITE).bg(BADGE_BG);
    let mut spans: Vec<Span> = vec![];
    let mut used: u16 = 0;
    let mut shown = 0;

    for (i, option) in options.iter().enumerate() {
        let badge = Span::styled(format!(" {} ×", option.label), badge_style);
        let width = badge.width() as u16;

        // Keep room for the separator and the "+N" counter if more follow
        let remaining = options.len() - i - 1;
        let reserve = if remaining > 0 {
            format!(" +{}", remaining).len() as u16
        } else {
            0
        };
        if used.saturating_add(width).saturating_add(reserve) > area.width {
            break;
        }

        interactions.register(
            InteractiveRegion::clickable(
                "select_badge",
                ClickRegion::new(area.x + used, area.y, width, 1),
                Action::RemoveBadge(field_idx, i),
            )
            .with_priority(CONTROL_PRIORITY),
        );

        spans.push(badge);
        used += width;
        shown += 1;

        if remaining > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
    }

    let hidden = options.len() - shown;
    if hidden > 0 {
        spans.push(Span::styled(format!("+{}", hidden), Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the open option list under (or above) `anchor`, kept inside `bounds`.
///
/// A list taller than the space it gets scrolls to keep the highlighted row
/// in view.
pub fn render_select_options(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    field: &mut Field,
    field_idx: usize,
    interactions: &mut InteractionRegistry,
) {
    if !field.select.is_open() {
        return;
    }

    let total = field.select.options().len();
    let rows = total.max(1).min(u16::MAX as usize) as u16;
    let wanted = rows.saturating_add(2);
    let below = (bounds.y + bounds.height).saturating_sub(anchor.y + anchor.height);
    let above = anchor.y.saturating_sub(bounds.y);

    let (y, height) = if wanted <= below || below >= above {
        (anchor.y + anchor.height, wanted.min(below))
    } else {
        let height = wanted.min(above);
        (anchor.y - height, height)
    };
    if height < 3 {
        return;
    }

    let popup = Rect::new(anchor.x, y, anchor.width, height);
    let visible = height.saturating_sub(2) as usize;
    let scroll_offset = field.select.scroll_to_highlight(visible);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_BLUE))
        .style(Style::new().bg(ratatui::style::Color::Black));
    if total > visible {
        let shown_end = (scroll_offset + visible).min(total);
        block = block.title_bottom(Line::styled(
            format!(" {}-{} of {} ", scroll_offset + 1, shown_end, total),
            Style::new().fg(TEXT_DIM),
        ));
    }
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);

    // Clicks on the list border are swallowed rather than reaching what is underneath
    interactions.register(InteractiveRegion {
        id: "select_list",
        bounds: popup.into(),
        on_click: None,
        on_hover: None,
        priority: LIST_PRIORITY - 1,
    });

    let select = &field.select;
    let mut lines: Vec<Line> = vec![];

    if select.options().is_empty() {
        lines.push(Line::styled(" (no options)", Style::new().fg(TEXT_DIM)));
    }

    for (i, option) in select
        .options()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible)
    {
        let is_selected = select.is_option_selected(&field.value, option);
        let is_highlighted = i == select.highlighted();

        let marker = if is_selected { "✓ " } else { "  " };
        let text = format!("{}{}", marker, option.label);
        let value = format!("{} ", option.value);
        let text_width = (inner.width as usize).saturating_sub(value.chars().count());

        let (mut style, mut value_style) = if is_selected {
            (Style::new().fg(ACCENT_MINT).bold(), Style::new().fg(ACCENT_MINT))
        } else {
            (Style::new().fg(TEXT_WHITE), Style::new().fg(TEXT_DIM))
        };
        if is_highlighted {
            style = style.bg(HIGHLIGHT_BG);
            value_style = value_style.bg(HIGHLIGHT_BG);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", text, width = text_width), style),
            Span::styled(value, value_style),
        ]));

        let row = (i - scroll_offset) as u16;
        interactions.register(
            InteractiveRegion::interactive(
                "select_option",
                ClickRegion::new(inner.x, inner.y + row, inner.width, 1),
                Action::ChooseOption(field_idx, i),
                Action::HighlightOption(field_idx, i),
            )
            .with_priority(LIST_PRIORITY),
        );
    }

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
