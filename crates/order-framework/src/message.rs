//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the lifecycle of a stored resource:
///
/// - **Create**: uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get**: fetches the current state of one resource by ID.
/// - **Update**: uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: removes one resource.
/// - **List**: snapshot of every resource, in creation order.
/// - **Clear**: removes every resource and hands them back, in creation order.
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
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Clear {
        respond_to: Response<Vec<T>>,
    },
}
