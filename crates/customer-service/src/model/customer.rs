use crate::model::{Address, PostalCode};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Represents a registered customer.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_store::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_store::ResourceActor).
///
/// See [`crate::customer_actor`] for details on:
/// - Creation parameters ([`CustomerCreate`])
/// - Update parameters ([`CustomerUpdate`])
/// - How the address is resolved before the customer is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: Address,
}

/// Payload for registering a new customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub postal_code: PostalCode,
}

/// Payload replacing the data of an existing customer.
///
/// The address is looked up again from `postal_code`, exactly as on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: String,
    pub postal_code: PostalCode,
}

impl Customer {
    /// Creates a Customer whose address is not resolved yet.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the customer store
    /// * `name` - Customer's name
    /// * `postal_code` - Postal code of the address to link
    pub fn new(id: CustomerId, name: impl Into<String>, postal_code: PostalCode) -> Self {
        Self {
            id,
            name: name.into(),
            address: Address::unresolved(postal_code),
        }
    }
}
