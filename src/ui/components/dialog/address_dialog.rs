//! Address detail dialog

use super::base::{key_hint, render_dialog, DialogBody, DialogConfig};
use crate::state::Address;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Width of the label column
const LABEL_WIDTH: usize = 14;

/// Label/value rows shown for an entry; complement only when present
pub fn detail_rows(address: &Address) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Zipcode", address.zipcode.clone()),
        ("Street", address.street.clone()),
        ("Number", address.street_number.clone()),
    ];
    if let Some(complement) = &address.complement {
        rows.push(("Complement", complement.clone()));
    }
    rows.extend([
        ("Neighborhood", address.neighborhood.clone()),
        ("City", address.city.clone()),
        ("State", address.state.clone()),
        (
            "Registered",
            address.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
    ]);
    rows
}

/// Render the detail dialog for one entry
pub fn render_address_dialog(frame: &mut Frame, address: &Address) {
    let lines = detail_rows(address)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<LABEL_WIDTH$}"),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Address details",
            accent: Color::Magenta,
            body: DialogBody::Lines(lines),
            hint: Some(key_hint(&["Esc"], "close, y to copy")),
            max_width: 64,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn address(complement: Option<&str>) -> Address {
        Address {
            id: Uuid::new_v4(),
            zipcode: "09405-400".to_string(),
            street: "Rua Zumbi".to_string(),
            street_number: "2".to_string(),
            complement: complement.map(str::to_string),
            neighborhood: "Colônia".to_string(),
            city: "Ribeirão Pires".to_string(),
            state: "São Paulo".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_rows_without_complement() {
        let labels: Vec<&str> = detail_rows(&address(None)).iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Zipcode", "Street", "Number", "Neighborhood", "City", "State", "Registered"]
        );
    }

    #[test]
    fn test_rows_with_complement() {
        let rows = detail_rows(&address(Some("apt. 100")));
        assert_eq!(rows[3], ("Complement", "apt. 100".to_string()));
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_registered_timestamp_format() {
        let rows = detail_rows(&address(None));
        assert_eq!(rows.last().unwrap().1, "2024-05-01 12:30 UTC");
    }
}
