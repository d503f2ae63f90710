//! # Customer Actor
//!
//! The customer store. Every create and update first settles the customer's address
//! through the [`AddressDirectory`] injected as the actor's context.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_store::ActorEntity) implementation for [`Customer`]
//! - [`directory`] - [`AddressDirectory`], the lookup-or-resolve step run before each write
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (address_actor, address_client) = address_actor::new(32);
//! let (customer_actor, customer_store) = customer_actor::new(32);
//!
//! tokio::spawn(address_actor.run(()));
//! tokio::spawn(customer_actor.run(AddressDirectory::new(address_client, resolver)));
//!
//! let customers = CustomerClient::new(customer_store, UpdatePolicy::Ignore);
//! let id = customers.insert(CustomerCreate { name, postal_code }).await?;
//! ```
//!
//! ## Key Features
//!
//! - **Sequential ID generation**: atomic counter starting at 1
//! - **No partial writes**: a failed address lookup aborts the customer write
//! - **Serialized saves**: the actor awaits the lookup inside its hook, so saves run one
//!   at a time
//! - **Blocking lookups**: while a postal lookup is in flight every other customer request
//!   waits behind it, reads included. A stalled ViaCEP call holds the store for up to
//!   `resolver.timeout_milliseconds`

pub mod directory;
pub mod entity;
pub mod error;

pub use directory::*;
pub use error::*;

use crate::model::{Customer, CustomerId};
use resource_store::{ResourceActor, ResourceClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    let customer_id_counter = Arc::new(AtomicU64::new(1));
    let next_customer_id = move || CustomerId(customer_id_counter.fetch_add(1, Ordering::SeqCst));

    ResourceActor::with_id_generator(buffer_size, next_customer_id)
}
