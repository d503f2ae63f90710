//! # Postal Resolver
//!
//! Turns a postal code into a full [`Address`]. The customer store only calls it when the
//! address store has no record for the code.
//!
//! - [`PostalResolver`] - the seam the customer actor depends on
//! - [`ViaCepClient`] - production implementation over the ViaCEP HTTP API

pub mod via_cep;

pub use via_cep::*;

use crate::model::{Address, PostalCode};
use async_trait::async_trait;

/// Errors that can occur while resolving a postal code.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ResolutionError {
    /// The service knows no address for this code.
    #[error("No address found for postal code {0}")]
    NotFound(PostalCode),

    /// The service refused the code as malformed.
    #[error("Postal code {0} was rejected by the resolver")]
    Rejected(PostalCode),

    /// The service could not be reached, timed out or answered with an unexpected status.
    #[error("Postal resolver unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a body that is not an address.
    #[error("Malformed resolver response: {0}")]
    MalformedResponse(String),
}

/// Resolves postal codes to addresses.
///
/// Implementations are shared by every customer save for the lifetime of the system,
/// behind an `Arc<dyn PostalResolver>`.
#[async_trait]
pub trait PostalResolver: Send + Sync {
    async fn resolve(&self, postal_code: &PostalCode) -> Result<Address, ResolutionError>;
}
