//! UI module for rendering the TUI

mod address_table;
mod components;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use components::{render_address_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area(), app.state.form_open);

    layout::draw_header(frame, areas.header, app);
    address_table::draw(frame, areas.table, app);
    if let Some(form_area) = areas.form {
        forms::draw_address_form(frame, form_area, app);
    }
    layout::draw_status_bar(frame, areas.status, app);

    // Overlays, error dialog on top
    if let Some(address) = app.state.detail_address() {
        render_address_dialog(frame, address);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
