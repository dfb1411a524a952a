//! # Cart Client
//!
//! High-level API for the cart actor. Wraps a `ResourceClient<CartRow>` and adds the
//! positional operations the shop works with.
use crate::cart_actor::CartError;
use crate::model::{CartRow, CartRowCreate, CartRowId, CartRowUpdate};
use async_trait::async_trait;
use order_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartRow>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartRow>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CartRow> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartRow> {
        &self.inner
    }

    /// Entity errors come back as the original [`CartError`]; everything else is plumbing.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    #[instrument(skip(self), fields(pizza = %params.pizza_type))]
    pub async fn add_row(&self, params: CartRowCreate) -> Result<CartRowId, CartError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Rows in the order they were added.
    pub async fn rows(&self) -> Result<Vec<CartRow>, CartError> {
        self.list().await
    }

    /// Removes the row shown at position `index` and returns it.
    #[instrument(skip(self))]
    pub async fn remove_row(&self, index: usize) -> Result<CartRow, CartError> {
        let rows = self.list().await?;
        let Some(row) = rows.into_iter().nth(index) else {
            warn!(index, "No row at position");
            return Err(CartError::RowNotFound(index));
        };
        self.delete(row.id).await?;
        debug!(row = %row.id, "Row removed");
        Ok(row)
    }

    #[instrument(skip(self))]
    pub async fn change_quantity(&self, id: CartRowId, quantity: u8) -> Result<CartRow, CartError> {
        debug!("Sending request");
        self.inner
            .update(id, CartRowUpdate { quantity })
            .await
            .map_err(Self::map_error)
    }

    /// Empties the cart, returning what it held.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Vec<CartRow>, CartError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(Self::map_error)
    }
}
