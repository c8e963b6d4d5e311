//! Postal code lookup adapter
//!
//! Resolves a Brazilian zipcode (CEP) to street, neighborhood, city and
//! state through the ViaCEP REST service.

mod client;
mod error;
mod traits;

pub use client::{normalize_zipcode, ViaCepClient, DEFAULT_BASE_URL};
pub use error::LookupError;
pub use traits::{LookupLocation, ZipcodeLookup};

#[cfg(test)]
pub use traits::MockZipcodeLookup;
