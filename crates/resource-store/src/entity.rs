//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every stored resource (Customer, Address, …)
//! implements to be kept by the generic `ResourceActor`. It specifies associated types for
//! the key, the DTOs, the injected context and the error, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`).
//!
//! # Keys
//! Every entity exposes its own key through [`ActorEntity::id`]. Entities whose key is
//! assigned by the store (a sequential customer number) are created through `Create`
//! requests on an actor built with an id generator. Entities whose key is part of the
//! data (an address keyed by postal code) are written with `InsertIfAbsent` instead.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g. calling
/// other actors or an HTTP service). The `Context` type is injected into every hook at
/// `run()` time rather than at construction.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The key of this entity. Ordered so listings come back sorted.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance under a generated id.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than per operation; clients deal with a single
    /// type and match on its variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key under which the entity is stored.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the generated ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// An error aborts the write.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for a stored entity.
    ///
    /// Implementations should fail before mutating `self`; the store keeps whatever
    /// state the entity is left in.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
