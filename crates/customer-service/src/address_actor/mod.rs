//! # Address Actor
//!
//! The address store: one [`Address`] per postal code, shared by every customer using
//! that code.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_store::ActorEntity) implementation for [`Address`]
//! - [`error`] - [`AddressError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Key Features
//!
//! - **No dependencies**: Context = ()
//! - **No generated ids**: the postal code is the key
//! - **Write once**: records enter through insert-if-absent and are never updated or deleted

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AddressClient;
use crate::model::Address;
use resource_store::ResourceActor;

/// Creates a new Address actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Address>, AddressClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AddressClient::new(generic_client))
}
