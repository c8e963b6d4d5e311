//! Typed store for the address form and the address list
//!
//! All mutation of the draft and the list goes through the update functions
//! here; the presentation layer only reads.

use super::{
    Address, AddressForm, AddressList, FieldErrors, LookupApplied, LookupTicket, RegionTable,
};
use crate::lookup::{LookupError, LookupLocation};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AddressStore {
    form: AddressForm,
    entries: AddressList,
    regions: Arc<RegionTable>,
}

impl AddressStore {
    /// Create an empty store resolving regions through `regions`
    pub fn new(regions: Arc<RegionTable>) -> Self {
        Self {
            form: AddressForm::new(),
            entries: AddressList::new(),
            regions,
        }
    }

    pub fn form(&self) -> &AddressForm {
        &self.form
    }

    /// Mutable access for field navigation and keystrokes
    pub fn form_mut(&mut self) -> &mut AddressForm {
        &mut self.form
    }

    pub fn entries(&self) -> &AddressList {
        &self.entries
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Cycle the state selector forward or backward
    pub fn cycle_region(&mut self, forward: bool) {
        self.form.cycle_region(&self.regions, forward);
    }

    /// Start a lookup for the draft zipcode, if it is complete
    pub fn begin_lookup(&mut self) -> Option<LookupTicket> {
        let ticket = self.form.begin_lookup()?;
        tracing::debug!(
            generation = ticket.generation,
            zipcode = %ticket.digits,
            "starting zipcode lookup"
        );
        Some(ticket)
    }

    /// Feed a lookup response back into the form
    pub fn apply_lookup(
        &mut self,
        generation: u64,
        result: Result<LookupLocation, LookupError>,
    ) -> LookupApplied {
        if let Err(LookupError::Failed(reason)) = &result {
            tracing::warn!(generation, %reason, "zipcode lookup failed");
        }
        let applied = self.form.apply_lookup(generation, result);
        if applied == LookupApplied::Stale {
            tracing::debug!(
                generation,
                current = self.form.lookup_generation(),
                "discarding stale lookup response"
            );
        }
        applied
    }

    /// Validate the draft and, on success, prepend a new entry and reset
    /// the form.
    ///
    /// On failure the field errors are attached to the form and returned;
    /// the list and the lock state are left untouched.
    pub fn submit(&mut self) -> Result<Uuid, FieldErrors> {
        let validated = match self.form.validate(&self.regions) {
            Ok(validated) => validated,
            Err(errors) => {
                let fields: Vec<&str> = errors.iter().map(|(f, _)| f.label()).collect();
                tracing::debug!(?fields, "address rejected");
                self.form.reject(errors.clone());
                return Err(errors);
            }
        };

        let address = Address {
            id: Uuid::new_v4(),
            zipcode: validated.zipcode,
            street: validated.street,
            street_number: validated.street_number,
            complement: validated.complement,
            neighborhood: validated.neighborhood,
            city: validated.city,
            state: validated.state_name,
            created_at: Utc::now(),
        };
        let id = address.id;
        tracing::info!(%id, zipcode = %address.zipcode, "address saved");

        self.entries.prepend(address);
        self.form.reset();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;

    fn store() -> AddressStore {
        AddressStore::new(Arc::new(RegionTable::brazil()))
    }

    fn fill(store: &mut AddressStore, zipcode: &str, street: &str, number: &str) {
        store.form_mut().zipcode.set_text(zipcode);
        let ticket = store.begin_lookup().unwrap();
        let applied = store.apply_lookup(
            ticket.generation,
            Ok(LookupLocation {
                street: street.to_string(),
                neighborhood: "Colônia".to_string(),
                city: "Ribeirão Pires".to_string(),
                state_code: "SP".to_string(),
            }),
        );
        assert_eq!(applied, LookupApplied::Populated);
        store.form_mut().street_number.set_text(number);
    }

    #[test]
    fn test_submit_prepends_entry_and_resets() {
        let mut store = store();
        fill(&mut store, "09405-400", "Rua Zumbi", "2");

        let id = store.submit().unwrap();

        assert_eq!(store.entries().len(), 1);
        let entry = store.entries().get(0).unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.summary(), "Rua Zumbi, 2");
        assert_eq!(entry.state, "São Paulo");
        assert_eq!(entry.zipcode, "09405-400");
        assert!(store.form().is_locked());
        assert!(store.form().zipcode.is_empty());
        assert!(store.form().errors().is_empty());
    }

    #[test]
    fn test_submissions_are_newest_first() {
        let mut store = store();
        fill(&mut store, "09405-400", "First Street", "1");
        store.submit().unwrap();
        fill(&mut store, "01310-100", "Second Street", "2");
        store.submit().unwrap();

        let streets: Vec<&str> = store.entries().iter().map(|a| a.street.as_str()).collect();
        assert_eq!(streets, vec!["Second Street", "First Street"]);
    }

    #[test]
    fn test_identical_drafts_get_distinct_ids() {
        let mut store = store();
        fill(&mut store, "09405-400", "Rua Zumbi", "2");
        let first = store.submit().unwrap();
        fill(&mut store, "09405-400", "Rua Zumbi", "2");
        let second = store.submit().unwrap();

        assert_ne!(first, second);
        assert_eq!(store.entries().len(), 2);
        let a = store.entries().get(0).unwrap();
        let b = store.entries().get(1).unwrap();
        assert_eq!(a.summary(), b.summary());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_failed_submit_is_idempotent() {
        let mut store = store();
        fill(&mut store, "09405-400", "Rua Zumbi", "");

        let first = store.submit().unwrap_err();
        let second = store.submit().unwrap_err();

        assert_eq!(first, second);
        assert_eq!(first.get(FieldName::StreetNumber), Some("Number is required"));
        assert_eq!(store.form().errors(), &first);
        assert!(store.entries().is_empty());
        assert!(!store.form().is_locked());
    }

    #[test]
    fn test_failed_submit_on_locked_form_stays_locked() {
        let mut store = store();
        let errors = store.submit().unwrap_err();
        assert!(errors.contains(FieldName::Zipcode));
        assert!(store.form().is_locked());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_successful_submit_clears_earlier_errors() {
        let mut store = store();
        fill(&mut store, "09405-400", "Rua Zumbi", "");
        store.submit().unwrap_err();
        store.form_mut().street_number.set_text("2");

        store.submit().unwrap();
        assert!(store.form().errors().is_empty());
    }

    #[test]
    fn test_injected_region_table_resolves_names() {
        let regions = Arc::new(RegionTable::new([("SP", "Sao Paulo (test)")]));
        let mut store = AddressStore::new(regions);
        fill(&mut store, "09405-400", "Rua Zumbi", "2");
        store.submit().unwrap();
        assert_eq!(store.entries().get(0).unwrap().state, "Sao Paulo (test)");
    }

    #[test]
    fn test_apply_lookup_after_submit_is_stale() {
        let mut store = store();
        fill(&mut store, "09405-400", "Rua Zumbi", "2");
        let pending = store.begin_lookup().unwrap();
        store.submit().unwrap();

        let applied = store.apply_lookup(pending.generation, Err(LookupError::NotFound));
        assert_eq!(applied, LookupApplied::Stale);
        assert!(store.form().errors().is_empty());
    }

    #[test]
    fn test_cycle_region_uses_store_table() {
        let regions = Arc::new(RegionTable::new([("SP", "São Paulo"), ("RJ", "Rio")]));
        let mut store = AddressStore::new(regions);
        fill(&mut store, "09405-400", "Rua Zumbi", "2");
        store.cycle_region(true);
        assert_eq!(store.form().state.as_region(), Some("RJ"));
    }
}
