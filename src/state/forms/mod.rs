//! Form domain layer
//!
//! Type-safe form handling for the address form: field values, validation
//! and the locked/unlocked phase.

mod field;
mod form_state;

pub use field::{FieldName, FormField, ZIPCODE_DIGITS};
pub use form_state::{
    AddressForm, FieldErrors, Form, FormPhase, LookupApplied, LookupTicket, LOOKUP_FAILED,
    SUBMIT_BUTTON_INDEX, ZIPCODE_NOT_FOUND,
};
