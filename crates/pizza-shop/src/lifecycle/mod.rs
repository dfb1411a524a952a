//! # System Lifecycle
//!
//! Starting, wiring and stopping the shop.
//!
//! - [`ShopSystem`] spawns the cart actor with its [`CartLimits`](crate::model::CartLimits)
//!   injected through `run(context)`, opens sessions on it and shuts it down.
//! - [`splash`] drives the startup progress indicator.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: sessions first, then the system's own client
//! 2. **Actor detects closure**: `receiver.recv()` returns `None`
//! 3. **Await completion**: the actor logs how many rows it held and exits
//!
//! Tracing is set up once by the binary through
//! [`order_framework::tracing::setup_tracing`].

pub mod shop_system;
pub mod splash;

pub use shop_system::*;
pub use splash::{show_splash, spawn_progress, SPLASH_DONE};
