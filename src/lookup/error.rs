//! Lookup error taxonomy

/// Why a lookup produced no location
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The service answered but does not know the zipcode
    #[error("zipcode not found")]
    NotFound,
    /// Transport failure, unexpected status or malformed body
    #[error("zipcode lookup failed: {0}")]
    Failed(String),
}
