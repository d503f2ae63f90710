//! # Resource Store
//!
//! Building blocks for keeping typed entities in actor-owned key/value stores. Each store
//! is a [`ResourceActor`]: a Tokio task that owns a map and processes requests one at a
//! time, reached through a cloneable [`ResourceClient`].
//!
//! ## Why an actor per store?
//!
//! - **Isolated state**: the map is owned by one task, so it needs no lock.
//! - **Atomic check-then-act**: a request such as `InsertIfAbsent` runs to completion
//!   before the next message is read, so "at most one record per key" holds under
//!   concurrent callers.
//! - **Uniform API**: every entity gets the same get / list / create / update / delete
//!   surface, typed by the entity's associated types.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - keys, DTOs and lifecycle hooks of a domain type
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the store itself
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! An entity whose hooks must consult another store receives that store's client as its
//! context:
//!
//! ```rust,ignore
//! let (address_actor, address_client) = ResourceActor::<Address>::new(32);
//! let (customer_actor, customer_client) =
//!     ResourceActor::<Customer>::with_id_generator(32, next_customer_id);
//!
//! tokio::spawn(address_actor.run(()));
//! tokio::spawn(customer_actor.run(AddressDirectory::new(address_client, resolver)));
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module offers a `MockClient` that answers requests from queued
//! expectations, and receiver helpers for asserting on the exact requests an actor sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
