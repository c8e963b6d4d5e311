//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows of the form shelf: three field rows, the submit row and borders
pub const FORM_HEIGHT: u16 = 3 * 3 + 3 + 2;

/// Screen regions, top to bottom
pub struct AppLayout {
    pub header: Rect,
    pub table: Rect,
    pub form: Option<Rect>,
    pub status: Rect,
}

/// Split the screen into header, table, optional form shelf and status bar
pub fn create_layout(area: Rect, form_open: bool) -> AppLayout {
    let form_height = if form_open { FORM_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Header
            Constraint::Min(3),              // Table
            Constraint::Length(form_height), // Form shelf
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        table: chunks[1],
        form: form_open.then_some(chunks[2]),
        status: chunks[3],
    }
}

/// Draw the title line with the entry count badge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.state.store.entries();
    let line = Line::from(vec![
        Span::styled(
            " Addresses ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", entries.count_label()),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // Focus-specific hints
    let hints = get_focus_hints(app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if app.state.is_lookup_pending() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Looking up zipcode…",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        width: width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused pane
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Form => format!(
            "Tab:next  Enter:lookup  ←/→:state  {SUBMIT_SHORTCUT}:save  F2/Esc:hide form"
        ),
        Focus::Table => "j/k:nav  Enter:details  y:copy  n/F2:new  q:quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_form() {
        let layout = create_layout(Rect::new(0, 0, 80, 40), true);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.form.map(|r| r.height), Some(FORM_HEIGHT));
        assert_eq!(layout.table.height, 40 - 2 - FORM_HEIGHT);
    }

    #[test]
    fn test_layout_without_form() {
        let layout = create_layout(Rect::new(0, 0, 80, 40), false);
        assert!(layout.form.is_none());
        assert_eq!(layout.table.height, 38);
        assert_eq!(layout.status.y, 39);
    }

    #[test]
    fn test_form_hints_mention_submit_shortcut() {
        assert!(get_focus_hints(Focus::Form).contains(SUBMIT_SHORTCUT));
        assert!(get_focus_hints(Focus::Table).contains("q:quit"));
        assert!(get_focus_hints(Focus::Form).contains("F2"));
    }
}
