//! Address form shelf rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{AddressForm, FieldName, Focus, FormField, FormPhase, RegionTable};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one field row
const FIELD_HEIGHT: u16 = 3;

/// Rows below the zipcode: field and width percentage, left to right
const FIELD_ROWS: [[(FieldName, u16); 3]; 2] = [
    [
        (FieldName::Street, 55),
        (FieldName::StreetNumber, 15),
        (FieldName::Complement, 30),
    ],
    [
        (FieldName::Neighborhood, 35),
        (FieldName::City, 35),
        (FieldName::State, 30),
    ],
];

/// Draw the form shelf
pub fn draw_address_form(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.state.store;
    let form = store.form();
    let is_focused = app.state.focus == Focus::Form;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(shelf_title(form))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Zipcode
            Constraint::Length(FIELD_HEIGHT),  // Street, number, complement
            Constraint::Length(FIELD_HEIGHT),  // Neighborhood, city, state
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    // Zipcode on its own narrow row
    let zipcode_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[0]);
    draw_form_field(frame, zipcode_row[0], app, FieldName::Zipcode);

    for (row, fields) in FIELD_ROWS.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(fields.map(|(_, width)| Constraint::Percentage(width)))
            .split(chunks[row + 1]);
        for (cell, (name, _)) in cells.iter().zip(fields.iter()) {
            draw_form_field(frame, *cell, app, *name);
        }
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(chunks[3]);
    render_button(
        frame,
        button_row[0],
        "Save",
        is_focused && form.is_submit_active(),
        true,
        Color::Green,
    );
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, name: FieldName) {
    let store = &app.state.store;
    let form = store.form();
    let field = form.field(name);

    draw_field(
        frame,
        area,
        FieldView {
            field,
            display: display_value(field, store.regions()),
            is_active: app.state.focus == Focus::Form && form.active_field_name() == Some(name),
            is_enabled: form.is_editable(name),
            error: form.errors().get(name),
        },
    );
}

/// Title of the shelf, reflecting the lock state
fn shelf_title(form: &AddressForm) -> &'static str {
    match form.phase() {
        FormPhase::Locked { .. } => " New address · enter a zipcode to unlock ",
        FormPhase::Unlocked { .. } => " New address ",
    }
}

/// Text shown inside a field box
fn display_value(field: &FormField, regions: &RegionTable) -> String {
    match field.as_region() {
        Some(code) => match regions.resolve(code) {
            Some(name) => format!("{code} - {name}"),
            None => code.to_string(),
        },
        None => field.as_text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_display_includes_name() {
        let regions = RegionTable::brazil();
        let mut field = FormField::region(FieldName::State);
        field.set_region(Some("SP".to_string()));
        assert_eq!(display_value(&field, &regions), "SP - São Paulo");
    }

    #[test]
    fn test_unknown_region_shows_code() {
        let regions = RegionTable::brazil();
        let mut field = FormField::region(FieldName::State);
        field.set_region(Some("XX".to_string()));
        assert_eq!(display_value(&field, &regions), "XX");
    }

    #[test]
    fn test_empty_region_is_blank() {
        let regions = RegionTable::brazil();
        let field = FormField::region(FieldName::State);
        assert_eq!(display_value(&field, &regions), "");
    }

    #[test]
    fn test_text_display() {
        let regions = RegionTable::brazil();
        let mut field = FormField::zipcode(FieldName::Zipcode);
        field.set_text("09405-400");
        assert_eq!(display_value(&field, &regions), "09405-400");
    }

    #[test]
    fn test_shelf_title_tracks_lock() {
        let form = AddressForm::new();
        assert!(shelf_title(&form).contains("unlock"));
    }
}
