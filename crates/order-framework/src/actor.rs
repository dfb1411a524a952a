//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities. It is the "Server" side of the Actor Model: messages are processed one at a
//! time, so the store needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// Each `ResourceActor` runs in its own Tokio task and owns its `store` exclusively.
/// The store is a `BTreeMap` keyed by id; ids come from an increasing counter, so
/// iteration order is creation order and survives deletes in the middle.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use order_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Slice { id: u32, name: String }
/// #[derive(Debug)] struct SliceCreate { name: String }
/// #[derive(Debug)] struct SliceUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("slice error")] struct SliceError;
///
/// #[async_trait]
/// impl ActorEntity for Slice {
///     type Id = u32;
///     type Create = SliceCreate;
///     type Update = SliceUpdate;
///     type Context = ();
///     type Error = SliceError;
///
///     fn from_create_params(id: u32, p: SliceCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, _: SliceUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Slice>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(SliceCreate { name: "first".into() }).await.unwrap();
///     client.create(SliceCreate { name: "second".into() }).await.unwrap();
///     let names: Vec<_> = client.list().await.unwrap().into_iter().map(|s| s.name).collect();
///     assert_eq!(names, ["first", "second"]);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls
    /// wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "CartRow" instead of "pizza_shop::model::cart::CartRow"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
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
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks mutate a copy so a rejected update leaves the stored entity intact.
                        let mut candidate = item.clone();
                        if let Err(e) = candidate.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = candidate;
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
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Clear { respond_to } => {
                    let drained = std::mem::take(&mut self.store);
                    info!(entity_type, removed = drained.len(), "Cleared");
                    let _ = respond_to.send(Ok(drained.into_values().collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
