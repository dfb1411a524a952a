//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every binary in the
//! workspace.
//!
//! - **Structured logging** with `tracing` macros and fields (`entity_type`, `step`, `status`)
//! - **Spans** from `#[instrument]` on client methods
//! - **Levels** controlled by `RUST_LOG`, defaulting to `info`
//! - **Compact format** with the module target hidden
//!
//! ```bash
//! RUST_LOG=info cargo run -p pizza-shop
//! RUST_LOG=debug cargo run -p pizza-shop          # full payloads
//! RUST_LOG=order_framework=debug cargo run -p pizza-shop
//! ```
//!
//! With `info`, an accepted order reads roughly:
//!
//! ```text
//! INFO Created entity_type="CartRow" id=row_1 size=1
//! INFO submit:send_order: Order confirmed total=2400.0
//! INFO submit:send_order: Step completed step="accept" status=Order Accepted
//! INFO submit:send_order: Step completed step="cook" status=Finished cooking
//! INFO submit:send_order: Step completed step="pack" status=Finished packing
//! INFO submit:send_order: Step completed step="handover" status=Handed over
//! INFO Cleared entity_type="CartRow" removed=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// Falls back to the `info` level when `RUST_LOG` is unset or invalid.
/// Call once per process; a second call panics inside `tracing-subscriber`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type / step fields carry the context instead
        .compact()
        .init();
}
