//! # Cart Actor
//!
//! The pending order lives in a [`ResourceActor`] of [`CartRow`]s. Requests are handled one
//! at a time by the actor task, so the cart needs no locking.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](order_framework::ActorEntity) implementation for [`CartRow`]
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and its [`CartClient`]
//!
//! ## Usage
//!
//! ```rust
//! use pizza_shop::cart_actor;
//! use pizza_shop::model::{CartLimits, CartRowCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, cart) = cart_actor::new();
//!     tokio::spawn(actor.run(CartLimits::default()));
//!
//!     cart.add_row(CartRowCreate {
//!         pizza_type: "Margherita Pizza".to_string(),
//!         size: None,
//!         toppings: vec!["Cheese".to_string()],
//!         quantity: 2,
//!         unit_price: 1100.0,
//!     })
//!     .await?;
//!
//!     assert_eq!(cart.rows().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use crate::model::CartRow;
use order_framework::ResourceActor;

/// Creates a new cart actor and its client.
pub fn new() -> (ResourceActor<CartRow>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CartClient::new(generic_client))
}
