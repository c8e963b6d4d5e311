//! Application state definitions

use super::{Address, AddressStore, RegionTable};
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// Which pane receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    Table,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Form draft and confirmed entries
    pub store: AddressStore,
    pub focus: Focus,
    /// Whether the form shelf is expanded
    pub form_open: bool,
    /// Selected row in the address table
    pub selected_index: usize,
    /// Entry shown in the detail dialog
    pub detail_entry: Option<Uuid>,
    /// Generation of the lookup whose response is still awaited
    pub pending_lookup: Option<u64>,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AddressStore::new(Arc::new(RegionTable::brazil())), true)
    }
}

impl AppState {
    pub fn new(store: AddressStore, form_open: bool) -> Self {
        Self {
            store,
            focus: if form_open { Focus::Form } else { Focus::Table },
            form_open,
            selected_index: 0,
            detail_entry: None,
            pending_lookup: None,
            status_message: None,
            error_queue: VecDeque::new(),
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Expand the shelf and move focus into the form
    pub fn open_form(&mut self) {
        self.form_open = true;
        self.focus = Focus::Form;
    }

    /// Collapse the shelf and move focus to the table
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.focus = Focus::Table;
    }

    pub fn toggle_form(&mut self) {
        if self.form_open {
            self.close_form();
        } else {
            self.open_form();
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.store.entries().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.store.entries().get(self.selected_index)
    }

    /// Open the detail dialog for the selected row
    pub fn open_detail(&mut self) {
        self.detail_entry = self.selected_address().map(|a| a.id);
    }

    pub fn close_detail(&mut self) {
        self.detail_entry = None;
    }

    pub fn detail_address(&self) -> Option<&Address> {
        let id = self.detail_entry?;
        self.store.entries().iter().find(|a| a.id == id)
    }

    /// Whether the latest lookup has not answered yet
    pub fn is_lookup_pending(&self) -> bool {
        self.pending_lookup == Some(self.store.form().lookup_generation())
    }
}
