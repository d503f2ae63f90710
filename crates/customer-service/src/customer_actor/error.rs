//! Error types for the Customer actor.

use crate::address_actor::AddressError;
use crate::resolver::ResolutionError;
use thiserror::Error;

/// Errors that can occur during customer operations.
///
/// The three variants are the whole taxonomy callers see: a missing customer, a failed
/// postal lookup, or a store that could not serve the request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The postal code of the customer's address could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The customer or address store failed.
    #[error("Customer storage error: {0}")]
    Storage(String),
}

impl From<AddressError> for CustomerError {
    fn from(e: AddressError) -> Self {
        CustomerError::Storage(e.to_string())
    }
}
