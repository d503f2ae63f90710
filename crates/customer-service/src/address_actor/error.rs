//! Error types for the Address actor.

use thiserror::Error;

/// Errors that can occur during address store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    /// Addresses outlive the customers linked to them and are never removed.
    #[error("Address {0} cannot be deleted")]
    Undeletable(String),

    /// The address store could not serve the request.
    #[error("Address storage error: {0}")]
    Storage(String),
}
