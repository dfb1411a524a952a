//! Errors surfaced by the shop session.

use crate::cart_actor::CartError;
use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("The order list is empty")]
    EmptyCart,

    #[error("No pizza selected at position {0}")]
    NoRowSelected(usize),

    #[error("Unknown pizza: {0}")]
    UnknownPizza(String),

    #[error("Unknown topping: {0}")]
    UnknownTopping(String),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
