//! Address form state: draft fields, validation and the lock state machine

use super::field::{FieldName, FormField, ZIPCODE_DIGITS};
use crate::lookup::{normalize_zipcode, LookupError, LookupLocation};
use crate::state::RegionTable;
use std::collections::BTreeMap;

/// Index of the submit button row (after the seven fields)
pub const SUBMIT_BUTTON_INDEX: usize = 7;

pub const ZIPCODE_NOT_FOUND: &str = "Zipcode not found";
pub const LOOKUP_FAILED: &str = "Could not look up the zipcode, check your request";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Whether focus may land on the given row
    fn is_focusable(&self, _index: usize) -> bool {
        true
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_focusable(index) {
                self.set_active_field(index);
                return;
            }
        }
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let mut index = self.active_field();
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_focusable(index) {
                self.set_active_field(index);
                return;
            }
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Field-scoped error messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Lock state of the form, carrying the current field errors.
///
/// `Locked` only allows editing the zipcode. A successful lookup unlocks the
/// form; only a successful submit locks it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Locked { errors: FieldErrors },
    Unlocked { errors: FieldErrors },
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Locked {
            errors: FieldErrors::new(),
        }
    }
}

impl FormPhase {
    pub fn is_locked(&self) -> bool {
        matches!(self, FormPhase::Locked { .. })
    }

    pub fn errors(&self) -> &FieldErrors {
        match self {
            FormPhase::Locked { errors } | FormPhase::Unlocked { errors } => errors,
        }
    }

    fn errors_mut(&mut self) -> &mut FieldErrors {
        match self {
            FormPhase::Locked { errors } | FormPhase::Unlocked { errors } => errors,
        }
    }

    fn unlock(&mut self) {
        if let FormPhase::Locked { errors } = self {
            *self = FormPhase::Unlocked {
                errors: std::mem::take(errors),
            };
        }
    }
}

/// Plain snapshot of the form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub zipcode: String,
    pub street: String,
    pub street_number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    /// Selected region code
    pub state: Option<String>,
}

impl AddressDraft {
    /// Check every field, collecting one message per invalid field
    pub fn validate(&self, regions: &RegionTable) -> Result<ValidatedDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let zipcode = self.zipcode.trim();
        if zipcode.chars().count() < ZIPCODE_DIGITS {
            errors.insert(FieldName::Zipcode, "Zipcode is required");
        } else if !is_valid_zipcode(zipcode) {
            errors.insert(FieldName::Zipcode, "Invalid zipcode format");
        }

        for (name, value) in [
            (FieldName::Street, &self.street),
            (FieldName::StreetNumber, &self.street_number),
            (FieldName::Neighborhood, &self.neighborhood),
            (FieldName::City, &self.city),
        ] {
            if value.trim().is_empty() {
                errors.insert(name, format!("{} is required", name.label()));
            }
        }

        let state_name = match self.state.as_deref() {
            None => {
                errors.insert(FieldName::State, "State is required");
                None
            }
            Some(code) => {
                let name = regions.resolve(code);
                if name.is_none() {
                    errors.insert(FieldName::State, "Unknown state");
                }
                name
            }
        };

        match state_name {
            Some(state_name) if errors.is_empty() => Ok(ValidatedDraft {
                zipcode: zipcode.to_string(),
                street: self.street.trim().to_string(),
                street_number: self.street_number.trim().to_string(),
                complement: self
                    .complement
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
                neighborhood: self.neighborhood.trim().to_string(),
                city: self.city.trim().to_string(),
                state_name: state_name.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// A draft that passed validation, trimmed, with the region resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub zipcode: String,
    pub street: String,
    pub street_number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state_name: String,
}

/// Handle for one in-flight lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub digits: String,
}

/// What applying a lookup response did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupApplied {
    Populated,
    NotFound,
    Failed,
    /// A newer lookup (or a reset) superseded this response
    Stale,
}

/// Check the fixed `99999-999` zipcode format
pub fn is_valid_zipcode(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == ZIPCODE_DIGITS + 1
        && bytes.iter().enumerate().all(|(i, b)| match i {
            5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Address form
#[derive(Debug, Clone)]
pub struct AddressForm {
    pub zipcode: FormField,
    pub street: FormField,
    pub street_number: FormField,
    pub complement: FormField,
    pub neighborhood: FormField,
    pub city: FormField,
    pub state: FormField,
    pub active_field_index: usize,
    phase: FormPhase,
    lookup_generation: u64,
}

impl AddressForm {
    pub fn new() -> Self {
        Self {
            zipcode: FormField::zipcode(FieldName::Zipcode),
            street: FormField::text(FieldName::Street),
            street_number: FormField::text(FieldName::StreetNumber),
            complement: FormField::text(FieldName::Complement),
            neighborhood: FormField::text(FieldName::Neighborhood),
            city: FormField::text(FieldName::City),
            state: FormField::region(FieldName::State),
            active_field_index: 0,
            phase: FormPhase::default(),
            lookup_generation: 0,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.phase.errors()
    }

    pub fn lookup_generation(&self) -> u64 {
        self.lookup_generation
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Zipcode => &self.zipcode,
            FieldName::Street => &self.street,
            FieldName::StreetNumber => &self.street_number,
            FieldName::Complement => &self.complement,
            FieldName::Neighborhood => &self.neighborhood,
            FieldName::City => &self.city,
            FieldName::State => &self.state,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Zipcode => &mut self.zipcode,
            FieldName::Street => &mut self.street,
            FieldName::StreetNumber => &mut self.street_number,
            FieldName::Complement => &mut self.complement,
            FieldName::Neighborhood => &mut self.neighborhood,
            FieldName::City => &mut self.city,
            FieldName::State => &mut self.state,
        }
    }

    /// Field shown on the given row, if the row is not the submit button
    pub fn field_name_at(index: usize) -> Option<FieldName> {
        FieldName::ALL.get(index).copied()
    }

    pub fn active_field_name(&self) -> Option<FieldName> {
        Self::field_name_at(self.active_field_index)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// The zipcode is always editable, everything else only once unlocked
    pub fn is_editable(&self, name: FieldName) -> bool {
        name == FieldName::Zipcode || !self.is_locked()
    }

    pub fn focus(&mut self, name: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.set_active_field(index);
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if self.is_focusable(self.active_field_index) {
            if let Some(field) = self.get_active_field_mut() {
                field.push_char(c);
            }
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if self.is_focusable(self.active_field_index) {
            if let Some(field) = self.get_active_field_mut() {
                field.pop_char();
            }
        }
    }

    /// Cycle the state selector through the region table
    pub fn cycle_region(&mut self, regions: &RegionTable, forward: bool) {
        if !self.is_editable(FieldName::State) {
            return;
        }
        let current = self.state.as_region();
        let next = if forward {
            regions.next_code(current)
        } else {
            regions.prev_code(current)
        };
        let next = next.map(str::to_string);
        self.state.set_region(next);
    }

    pub fn draft(&self) -> AddressDraft {
        let complement = self.complement.as_text();
        AddressDraft {
            zipcode: self.zipcode.as_text().to_string(),
            street: self.street.as_text().to_string(),
            street_number: self.street_number.as_text().to_string(),
            complement: (!complement.is_empty()).then(|| complement.to_string()),
            neighborhood: self.neighborhood.as_text().to_string(),
            city: self.city.as_text().to_string(),
            state: self.state.as_region().map(str::to_string),
        }
    }

    /// Start a lookup for the current zipcode.
    ///
    /// Returns `None` without touching anything when fewer than eight digits
    /// have been entered.
    pub fn begin_lookup(&mut self) -> Option<LookupTicket> {
        let digits = normalize_zipcode(self.zipcode.as_text())?;
        self.lookup_generation += 1;
        Some(LookupTicket {
            generation: self.lookup_generation,
            digits,
        })
    }

    /// Apply a lookup response started with `begin_lookup`
    pub fn apply_lookup(
        &mut self,
        generation: u64,
        result: Result<LookupLocation, LookupError>,
    ) -> LookupApplied {
        if generation != self.lookup_generation {
            return LookupApplied::Stale;
        }

        match result {
            Ok(location) => {
                self.street.set_text(location.street);
                self.neighborhood.set_text(location.neighborhood);
                self.city.set_text(location.city);
                self.state.set_region(Some(location.state_code));
                self.phase.errors_mut().remove(FieldName::Zipcode);
                self.phase.unlock();
                self.focus(FieldName::Street);
                LookupApplied::Populated
            }
            Err(LookupError::NotFound) => {
                self.phase
                    .errors_mut()
                    .insert(FieldName::Zipcode, ZIPCODE_NOT_FOUND);
                LookupApplied::NotFound
            }
            Err(LookupError::Failed(_)) => {
                self.phase
                    .errors_mut()
                    .insert(FieldName::Zipcode, LOOKUP_FAILED);
                LookupApplied::Failed
            }
        }
    }

    /// Validate the whole draft
    pub fn validate(&self, regions: &RegionTable) -> Result<ValidatedDraft, FieldErrors> {
        self.draft().validate(regions)
    }

    /// Replace the error map after a failed submit, keeping the phase
    pub(crate) fn reject(&mut self, errors: FieldErrors) {
        *self.phase.errors_mut() = errors;
    }

    /// Clear every field and re-lock.
    ///
    /// Bumps the lookup generation so responses for the previous draft are
    /// discarded.
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.phase = FormPhase::default();
        self.lookup_generation += 1;
        self.active_field_index = 0;
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AddressForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn is_focusable(&self, index: usize) -> bool {
        match Self::field_name_at(index) {
            Some(name) => self.is_editable(name),
            None => true,
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.active_field_name()?;
        Some(self.field_mut(name))
    }
}
