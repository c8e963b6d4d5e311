//! Address table view

use super::widgets::render_scrollable_table;
use crate::app::App;
use crate::state::{Address, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const COLUMNS: [&str; 5] = ["Address", "Neighborhood", "City", "State", "Zipcode"];

/// Draw the list of confirmed addresses, newest first
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == Focus::Table;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let entries = app.state.store.entries();
    if entries.is_empty() {
        draw_empty_state(frame, area, block);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let rows = entries.iter().map(|address| Row::new(row_cells(address)));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(13),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▸ ");

    let selected = is_focused.then_some(app.state.selected_index);
    render_scrollable_table(frame, area, table, selected);
}

/// Cell values of one row, in column order
fn row_cells(address: &Address) -> [String; 5] {
    [
        address.summary(),
        address.neighborhood.clone(),
        address.city.clone(),
        address.state.clone(),
        address.zipcode.clone(),
    ]
}

fn draw_empty_state(frame: &mut Frame, area: Rect, block: Block) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Address list is empty",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Use the form to register your first address",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
