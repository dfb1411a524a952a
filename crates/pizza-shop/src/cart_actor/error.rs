//! Error types for the cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Quantity outside `1..=max`.
    #[error("Invalid quantity {quantity}: must be between 1 and {max}")]
    InvalidQuantity { quantity: u8, max: u8 },

    /// No row at this position.
    #[error("No cart row at position {0}")]
    RowNotFound(usize),

    /// The row id is not in the cart.
    #[error("Cart row not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
