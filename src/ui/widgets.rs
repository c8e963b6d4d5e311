//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{Table, TableState},
    Frame,
};

/// Render a table that keeps the selected row visible.
///
/// Pass `None` to render without a highlighted row (e.g. when the table
/// does not have focus).
///
/// # Example
/// ```ignore
/// let table = Table::new(rows, widths).block(block);
/// render_scrollable_table(frame, area, table, Some(app.state.selected_index));
/// ```
pub fn render_scrollable_table(
    frame: &mut Frame,
    area: Rect,
    table: Table,
    selected_index: Option<usize>,
) {
    let mut table_state = TableState::default().with_selected(selected_index);
    frame.render_stateful_widget(table, area, &mut table_state);
}
