//! Typed clients wrapping the generic resource clients.

pub mod cart_client;

pub use cart_client::CartClient;
