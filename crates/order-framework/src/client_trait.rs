//! # ActorClient Trait
//!
//! Common interface for resource‑specific clients: default `get`, `delete` and `list`
//! built on top of a generic `ResourceClient`, with errors mapped to the resource's own type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use order_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Topping { id: u32 }
/// #[derive(Debug)] struct ToppingCreate;
/// #[derive(Debug)] struct ToppingUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ToppingError(String);
///
/// impl From<String> for ToppingError {
///     fn from(s: String) -> Self { ToppingError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Topping {
///     type Id = u32;
///     type Create = ToppingCreate;
///     type Update = ToppingUpdate;
///     type Context = ();
///     type Error = ToppingError;
///
///     fn from_create_params(id: u32, _: ToppingCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: ToppingUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct ToppingClient {
///     inner: ResourceClient<Topping>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Topping> for ToppingClient {
///     type Error = ToppingError;
///
///     fn inner(&self) -> &ResourceClient<Topping> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ToppingError(e.to_string())
///     }
/// }
///
/// async fn usage(client: ToppingClient) {
///     // get(), delete() and list() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every entity in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
