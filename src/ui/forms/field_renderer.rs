//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a field should be drawn
pub struct FieldView<'a> {
    pub field: &'a FormField,
    /// Text to show; may differ from the raw value (e.g. region names)
    pub display: String,
    pub is_active: bool,
    /// Locked fields are dimmed and never show a cursor
    pub is_enabled: bool,
    pub error: Option<&'a str>,
}

/// Draw a bordered form field. The label sits in the top border, the
/// validation message (if any) in the bottom border.
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let border_style = if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if !view.is_enabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = if view.display.is_empty() {
        vec![Span::styled(
            view.field.name.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(view.display.clone(), value_style)]
    };
    if view.is_active && view.is_enabled {
        // Cursor goes before the placeholder, after typed text
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if view.display.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let label = if view.field.name.is_required() {
        format!(" {} * ", view.field.label())
    } else {
        format!(" {} ", view.field.label())
    };
    let mut block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
