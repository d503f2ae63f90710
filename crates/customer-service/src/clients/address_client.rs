//! # Address Client
//!
//! Provides a high‑level API for interacting with the `Address` actor.
//! It wraps a `ResourceClient<Address>`; `get` and `list` come from [`ActorClient`].
use crate::address_actor::AddressError;
use crate::model::Address;
use async_trait::async_trait;
use resource_store::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Address actor.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<Address>,
}

impl AddressClient {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }

    /// Stores `address` unless its postal code is already taken, and returns the record
    /// the store holds for that code afterwards.
    #[instrument(skip(self, address), fields(postal_code = %address.postal_code))]
    pub async fn insert_if_absent(&self, address: Address) -> Result<Address, AddressError> {
        debug!("Sending request");
        self.inner
            .insert_if_absent(address)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Address> for AddressClient {
    type Error = AddressError;

    fn inner(&self) -> &ResourceClient<Address> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<AddressError>() {
                Ok(address_error) => *address_error,
                Err(other) => AddressError::Storage(other.to_string()),
            },
            other => AddressError::Storage(other.to_string()),
        }
    }
}
