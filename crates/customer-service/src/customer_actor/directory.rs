//! The lookup-or-resolve routine run before every customer write.

use crate::clients::AddressClient;
use crate::customer_actor::CustomerError;
use crate::model::{Address, PostalCode};
use crate::resolver::PostalResolver;
use resource_store::ActorClient;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Finds the stored [`Address`] for a postal code, creating it on first use.
///
/// This is the Customer actor's context: one instance, built once by the lifecycle layer,
/// holds the address store client and the postal resolver for the actor's whole life.
#[derive(Clone)]
pub struct AddressDirectory {
    addresses: AddressClient,
    resolver: Arc<dyn PostalResolver>,
}

impl AddressDirectory {
    pub fn new(addresses: AddressClient, resolver: Arc<dyn PostalResolver>) -> Self {
        Self {
            addresses,
            resolver,
        }
    }

    /// Returns the address stored for `postal_code`.
    ///
    /// On a miss the resolver is called once and its answer written with insert-if-absent
    /// before this returns, so the address is in the store before any customer links to
    /// it. If another writer got there first, its record is returned instead.
    ///
    /// # Errors
    /// - [`CustomerError::Resolution`] if the postal code cannot be resolved (nothing is written)
    /// - [`CustomerError::Storage`] if the address store fails
    #[instrument(skip(self, postal_code), fields(%postal_code))]
    pub async fn address_for(&self, postal_code: &PostalCode) -> Result<Address, CustomerError> {
        if let Some(address) = self.addresses.get(postal_code.clone()).await? {
            debug!("Address already stored");
            return Ok(address);
        }

        info!("Address not stored, resolving postal code");
        let mut resolved = self.resolver.resolve(postal_code).await?;
        resolved.postal_code = postal_code.clone();

        let stored = self.addresses.insert_if_absent(resolved).await?;
        Ok(stored)
    }
}
