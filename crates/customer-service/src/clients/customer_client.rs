//! # Customer Client
//!
//! Provides a high‑level API for interacting with the `Customer` actor.
//! It wraps a `ResourceClient<Customer>`; the address lookup happens in the actor's hooks.
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_store::{ActorClient, FrameworkError, ResourceClient};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// What `update` does when the customer id is unknown.
///
/// Neither policy writes anything or calls the postal resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Succeed without doing anything.
    #[default]
    Ignore,
    /// Fail with [`CustomerError::NotFound`].
    Reject,
}

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
    update_missing: UpdatePolicy,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>, update_missing: UpdatePolicy) -> Self {
        Self {
            inner,
            update_missing,
        }
    }

    /// Every customer, ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
        self.list().await
    }

    /// The customer stored under `id`.
    ///
    /// # Errors
    /// [`CustomerError::NotFound`] if there is none.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.get(id)
            .await?
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    /// Registers a customer, linking it to the stored address for its postal code.
    #[instrument(skip(self))]
    pub async fn insert(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the name and address of customer `id`.
    ///
    /// An unknown id is handled according to the client's [`UpdatePolicy`].
    #[instrument(skip(self))]
    pub async fn update(&self, id: CustomerId, update: CustomerUpdate) -> Result<(), CustomerError> {
        debug!("Sending request");
        match self.inner.update(id, update).await {
            Ok(_) => Ok(()),
            Err(FrameworkError::NotFound(_)) if self.update_missing == UpdatePolicy::Ignore => {
                info!("Customer not stored, update ignored");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    /// Entity errors raised by the customer hooks are recovered as they were raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CustomerError>() {
                Ok(customer_error) => *customer_error,
                Err(other) => CustomerError::Storage(other.to_string()),
            },
            other => CustomerError::Storage(other.to_string()),
        }
    }
}
