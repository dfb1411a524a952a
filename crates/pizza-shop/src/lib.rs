//! # Pizza Shop
//!
//! A small pizza ordering core built from classic design patterns on top of
//! [`order_framework`].
//!
//! ## Core Components
//!
//! - **[model]**: Pizza snapshots and their builder, pooled ingredients, cart rows, order status, the menu.
//! - **[command]**: [`OrderCommand`](command::OrderCommand) turns a base pizza plus extras into a priced pizza.
//! - **[kitchen]**: The accept, cook, pack and hand-over steps run by the framework's step pipeline.
//! - **[mediator]**: [`OrderMediator`](mediator::OrderMediator) relays between customer and order manager.
//! - **[cart_actor]** / **[clients]**: The cart as a resource actor and its typed client.
//! - **[session]**: [`ShopSession`](session::ShopSession), the per-customer context.
//! - **[lifecycle]**: Starting and stopping the actors, startup progress.
//!
//! ## Flow
//!
//! ```text
//! PizzaSelection ─► PizzaBuilder ─► OrderCommand ─► cart row
//!                                                      │ submit
//!                                                      ▼
//!                    OrderMediator ─► confirm ─► kitchen pipeline ─► notices
//! ```
//!
//! ## Testing
//!
//! [`presenter::ScriptedPresenter`] replays yes/no answers and records notices;
//! [`order_framework::mock`] covers client logic without a running actor.

pub mod cart_actor;
pub mod clients;
pub mod command;
pub mod config;
pub mod error;
pub mod kitchen;
pub mod lifecycle;
pub mod mediator;
pub mod model;
pub mod presenter;
pub mod session;
pub mod summary;
