//! # Generic Messages
//!
//! This module defines the request types exchanged between `ResourceClient` and
//! `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation on its store.
///
/// The variants map to the key/value store contract:
///
/// - **Create**: generate a key, build the entity from [`ActorEntity::Create`], store it.
/// - **Get**: find by key.
/// - **List**: find all, ordered by key.
/// - **Update**: mutate a stored entity through [`ActorEntity::on_update`].
/// - **Delete**: remove by key.
/// - **InsertIfAbsent**: store an entity under its own key unless the key is taken,
///   answering with whichever record ends up stored. Atomic because the actor
///   processes one message at a time.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    InsertIfAbsent {
        item: T,
        respond_to: Response<T>,
    },
}
