//! Address entries and the in-memory address list

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A confirmed, immutable address entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub zipcode: String,
    pub street: String,
    pub street_number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    /// Resolved display name of the region, not its code
    pub state: String,
    pub created_at: DateTime<Utc>,
}

impl Address {
    /// One-line street address: `street, number[, complement]`
    pub fn summary(&self) -> String {
        match &self.complement {
            Some(complement) => format!(
                "{}, {}, {}",
                self.street, self.street_number, complement
            ),
            None => format!("{}, {}", self.street, self.street_number),
        }
    }

    /// Multi-line form used for clipboard copies
    pub fn to_clipboard_text(&self) -> String {
        format!(
            "{}\n{} - {}/{}\n{}",
            self.summary(),
            self.neighborhood,
            self.city,
            self.state,
            self.zipcode
        )
    }
}

/// Prepend-only list of confirmed entries, newest first
#[derive(Debug, Clone, Default)]
pub struct AddressList {
    entries: Vec<Address>,
}

impl AddressList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn prepend(&mut self, address: Address) {
        self.entries.insert(0, address);
    }

    pub fn get(&self, index: usize) -> Option<&Address> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label for the item count badge
    pub fn count_label(&self) -> String {
        match self.entries.len() {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        }
    }
}
