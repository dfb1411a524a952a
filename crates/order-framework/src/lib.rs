//! # Order Framework
//!
//! Generic building blocks for small order-handling services:
//!
//! 1. **Entity Layer** ([`ActorEntity`]): your domain type and its lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]): one Tokio task owning an ordered store,
//!    processing requests sequentially, so the store needs no lock.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): cloneable, typed handles.
//! 4. **Workflow Layer** ([`pipeline::Pipeline`]): a linear chain of steps that share one
//!    status value and must run in a fixed order.
//! 5. **Flyweights** ([`pool::InternPool`]): shared, deduplicated strings.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `ResourceActor::run(context)` rather than `new()`, so actors
//! can be created first and wired afterwards:
//!
//! ```rust
//! use order_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Oven { id: u32, temp: u32 }
//! #[derive(Debug)] struct OvenCreate;
//! #[derive(Debug)] struct OvenUpdate(u32);
//! #[derive(Debug, thiserror::Error)] #[error("too hot")] struct OvenError;
//!
//! /// Upper temperature limit, injected at run time.
//! struct OvenLimits { max: u32 }
//!
//! #[async_trait]
//! impl ActorEntity for Oven {
//!     type Id = u32;
//!     type Create = OvenCreate;
//!     type Update = OvenUpdate;
//!     type Context = OvenLimits;
//!     type Error = OvenError;
//!
//!     fn from_create_params(id: u32, _: OvenCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, temp: 0 })
//!     }
//!
//!     async fn on_update(&mut self, u: OvenUpdate, ctx: &OvenLimits) -> Result<(), Self::Error> {
//!         if u.0 > ctx.max { return Err(OvenError); }
//!         self.temp = u.0;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Oven>::new(10);
//!     tokio::spawn(actor.run(OvenLimits { max: 300 }));
//!
//!     let id = client.create(OvenCreate).await.unwrap();
//!     assert_eq!(client.update(id, OvenUpdate(250)).await.unwrap().temp, 250);
//!     assert!(client.update(id, OvenUpdate(900)).await.is_err());
//!     // A rejected update leaves the stored entity untouched
//!     assert_eq!(client.get(id).await.unwrap().unwrap().temp, 250);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from scripted expectations, so code built
//! on a client can be tested without spawning its actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod pipeline;
pub mod pool;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, PipelineError};
pub use message::{ResourceRequest, Response};
pub use pipeline::{Pipeline, PipelineReport, Step};
pub use pool::InternPool;
