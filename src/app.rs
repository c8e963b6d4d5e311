//! Application state and core logic

use crate::config::AppConfig;
use crate::lookup::{LookupError, LookupLocation, ViaCepClient, ZipcodeLookup};
use crate::state::{
    AddressStore, AppState, FieldName, Focus, Form, LookupApplied, RegionTable,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Response of a background lookup, tagged with the generation that
/// started it
#[derive(Debug)]
pub struct LookupMessage {
    pub generation: u64,
    pub result: Result<LookupLocation, LookupError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Zipcode lookup adapter
    lookup: Arc<dyn ZipcodeLookup>,
    lookup_tx: UnboundedSender<LookupMessage>,
    lookup_rx: UnboundedReceiver<LookupMessage>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the configured lookup service
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = ViaCepClient::new(config.lookup_base_url(), config.lookup_timeout())?;
        tracing::info!(base_url = %client.base_url(), "using zipcode lookup service");

        let store = AddressStore::new(Arc::new(RegionTable::brazil()));
        let state = AppState::new(store, config.form_open_on_start());

        Ok(Self::with_lookup(Arc::new(client), state))
    }

    /// Create an App around any lookup implementation
    pub fn with_lookup(lookup: Arc<dyn ZipcodeLookup>, state: AppState) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        Self {
            state,
            lookup,
            lookup_tx,
            lookup_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Detail dialog is modal too
        if self.state.detail_entry.is_some() {
            self.handle_detail_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Table => self.handle_table_key(key),
        }

        Ok(())
    }

    /// Handle keys while the form has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = self.state.store.form();
        let on_submit = form.is_submit_active();
        let active = form.active_field_name();

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.blur_active_field();
                self.state.store.form_mut().next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_active_field();
                self.state.store.form_mut().prev_field();
            }
            KeyCode::Enter if on_submit => self.submit_form(),
            KeyCode::Enter => {
                self.blur_active_field();
                self.state.store.form_mut().next_field();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form();
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::ALT_SUBMIT_MODIFIER) => {
                self.submit_form();
            }
            KeyCode::Esc => {
                self.blur_active_field();
                self.state.close_form();
            }
            KeyCode::F(2) => {
                self.blur_active_field();
                self.state.toggle_form();
            }
            KeyCode::Left if active == Some(FieldName::State) => {
                self.state.store.cycle_region(false);
            }
            KeyCode::Right if active == Some(FieldName::State) => {
                self.state.store.cycle_region(true);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.store.form_mut().input_char(c);
            }
            KeyCode::Backspace => self.state.store.form_mut().backspace(),
            _ => {}
        }
    }

    /// Handle keys while the address table has focus
    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => self.state.open_detail(),
            KeyCode::Char('y') => {
                if let Some(text) = self.state.selected_address().map(|a| a.to_clipboard_text()) {
                    self.copy_to_clipboard(&text);
                }
            }
            KeyCode::Tab | KeyCode::Char('n') => self.state.open_form(),
            KeyCode::F(2) => self.state.toggle_form(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while the detail dialog is open
    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.state.close_detail(),
            KeyCode::Char('y') => {
                if let Some(text) = self.state.detail_address().map(|a| a.to_clipboard_text()) {
                    self.copy_to_clipboard(&text);
                }
            }
            _ => {}
        }
    }

    /// Focus is about to leave the active field
    fn blur_active_field(&mut self) {
        if self.state.store.form().active_field_name() == Some(FieldName::Zipcode) {
            self.start_lookup();
        }
    }

    /// Start a background lookup for the draft zipcode.
    ///
    /// Does nothing until eight digits have been entered.
    fn start_lookup(&mut self) {
        let Some(ticket) = self.state.store.begin_lookup() else {
            return;
        };
        self.state.pending_lookup = Some(ticket.generation);

        let lookup = Arc::clone(&self.lookup);
        let tx = self.lookup_tx.clone();
        tokio::spawn(async move {
            let result = lookup.lookup(&ticket.digits).await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(LookupMessage {
                generation: ticket.generation,
                result,
            });
        });
    }

    /// Apply every lookup response that has arrived since the last tick
    pub fn poll_lookups(&mut self) {
        while let Ok(message) = self.lookup_rx.try_recv() {
            self.apply_lookup_message(message);
        }
    }

    fn apply_lookup_message(&mut self, message: LookupMessage) {
        if self.state.pending_lookup == Some(message.generation) {
            self.state.pending_lookup = None;
        }
        if self.state.store.apply_lookup(message.generation, message.result)
            == LookupApplied::Populated
        {
            self.state.status_message = Some("Address found".to_string());
        }
    }

    /// Validate and save the draft
    fn submit_form(&mut self) {
        match self.state.store.submit() {
            Ok(_) => {
                self.state.reset_selection();
                self.state.status_message = Some("Address saved".to_string());
            }
            Err(errors) => {
                let noun = if errors.len() == 1 { "field" } else { "fields" };
                self.state.status_message =
                    Some(format!("Please fix {} {}", errors.len(), noun));
            }
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        let copied = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string()));
        match copied {
            Ok(()) => {
                self.state.status_message = Some("Address copied to clipboard".to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.push_error(format!("Failed to copy to clipboard: {e}"));
            }
        }
    }
}
