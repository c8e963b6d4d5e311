//! Trait abstraction for the lookup adapter to enable mocking in tests

use super::LookupError;
use async_trait::async_trait;

/// Location resolved from a zipcode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupLocation {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// Region abbreviation, e.g. `SP`
    pub state_code: String,
}

/// Stateless request/response boundary to the zipcode directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZipcodeLookup: Send + Sync {
    /// Resolve an already-normalized, digits-only zipcode
    async fn lookup(&self, digits: &str) -> Result<LookupLocation, LookupError>;
}
