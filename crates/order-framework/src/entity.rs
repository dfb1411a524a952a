//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (a cart row, for instance) implements
//! to be managed by the generic `ResourceActor`. It names the associated types for IDs, DTOs,
//! context and errors, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Only `on_update` must be written by every entity.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can await other actors. The `Context` type is
/// injected into every hook at `run()` time rather than at construction.
///
/// # Ordering
/// Ids are generated from a monotonically increasing `u32` counter and must be `Ord`.
/// The actor keeps its store sorted by id, so listing returns entities in creation order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor, not one per message: a client deals with a single
    /// error type for every operation it sends.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called immediately after the entity is created, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
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
