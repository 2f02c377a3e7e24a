//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the catalog binary.
//!
//! The actor logs its lifecycle (start, shutdown) and every successful write at `info`,
//! each incoming request at `debug` with the payload recorded via `?params`, and failed
//! writes at `warn` with the error as `%error`. `entity_type` is attached to every actor
//! event so lines can be told apart without module paths.
//!
//! ```bash
//! RUST_LOG=info cargo run      # writes and lifecycle
//! RUST_LOG=debug cargo run     # full payloads
//! RUST_LOG=resource_store=debug,info cargo run   # debug for the store only
//! ```
//!
//! With `RUST_LOG=debug`, adding a product looks like:
//!
//! ```text
//! DEBUG add_product{id=... params=ProductCreate { .. }}: Sending request
//! DEBUG Action entity_type="Category" id=... action=AddProduct(..)
//!  INFO Action ok entity_type="Category" id=...
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Filter comes from `RUST_LOG`, defaulting to `info`.
///
/// Panics if a global subscriber is already installed, so call it once from `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where an event came from
        .compact()
        .init();
}
