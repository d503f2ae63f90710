//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the component that owns one key/value store
//! and serves every request against it. It is the "Server" side of the Actor Model:
//! messages are processed sequentially, so the store never needs a lock and
//! check-then-act sequences such as insert-if-absent are atomic.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The generic actor that manages a collection of entities.
///
/// The actor owns the `store` and the receiver end of the channel. Each actor runs in its
/// own Tokio task; callers talk to it through a cloneable [`ResourceClient`].
///
/// # Usage Pattern
///
/// 1.  **Create**: Call [`ResourceActor::new`] (keys supplied by the entities) or
///     [`ResourceActor::with_id_generator`] (keys generated on `Create`).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Address>::new(32);
/// tokio::spawn(actor.run(()));
/// let stored = client.insert_if_absent(address).await?;
/// ```
///
/// # Operations
///
/// * **Create**: generates the id, calls `T::from_create_params`, then `on_create`, then
///   inserts. A failing hook leaves the store untouched.
/// * **Get** / **List**: clones out of the store. Listing is ordered by key.
/// * **Update**: calls `on_update` on the stored entity and answers with its new state.
/// * **Delete**: calls `on_delete`, then removes.
/// * **InsertIfAbsent**: answers with the stored entity when the key is taken,
///   otherwise runs `on_create` on the new one and stores it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Option<IdGenerator<T::Id>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor whose entities carry their own keys, and its client.
    ///
    /// `Create` requests are answered with [`FrameworkError::MissingIdGenerator`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    /// Creates an actor that assigns keys on `Create` by calling `next_id_fn`.
    pub fn with_id_generator(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id_fn)))
    }

    fn build(buffer_size: usize, next_id: Option<IdGenerator<T::Id>>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook. Dependencies created after
    /// the actor (other clients, an HTTP resolver) are wired in here.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Customer" instead of "customer_service::model::customer::Customer"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(next_id) = self.next_id.as_ref() else {
                        warn!(entity_type, "Create without id generator");
                        let _ = respond_to.send(Err(FrameworkError::MissingIdGenerator));
                        continue;
                    };
                    let id = next_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::InsertIfAbsent { mut item, respond_to } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, "InsertIfAbsent");
                    if let Some(existing) = self.store.get(&id) {
                        info!(entity_type, %id, "Already stored");
                        let _ = respond_to.send(Ok(existing.clone()));
                        continue;
                    }
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Inserted");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
