//! # Catalog API
//!
//! A REST API for a two-level catalog: categories, each owning an ordered list of
//! embedded products.
//!
//! ## Architecture
//!
//! Requests flow through three layers:
//!
//! 1. **HTTP** ([`api`]) - axum routes and handlers. Each handler parses its input, makes one
//!    store call, and maps the result (or [`ApiError`](api::ApiError)) to a response.
//! 2. **Client** ([`clients`]) - [`CategoryClient`](clients::CategoryClient), a cloneable
//!    typed handle injected into the router as state. There is no global store handle.
//! 3. **Store** ([`category_actor`]) - a `resource_store::ResourceActor<Category>` that owns
//!    every category document and applies writes one at a time.
//!
//! ### Embedded products
//!
//! Products have no collection of their own. Adding, updating or removing one is a
//! [`CategoryAction`](category_actor::CategoryAction) that the actor applies to a working copy
//! of the parent, validates, and commits in a single step. Two concurrent writes to the same
//! category therefore cannot lose each other's changes.
//!
//! ### Errors
//!
//! | Error | Status |
//! |---|---|
//! | malformed body, failed validation, malformed id | 400 |
//! | unknown category or product | 404 |
//! | store unavailable | 500 |
//!
//! ## Module Tour
//!
//! - [`model`] - `Category`, `Product`, their ids and request payloads.
//! - [`category_actor`] - how the store validates and mutates categories.
//! - [`clients`] - the typed client.
//! - [`api`] - routes and handlers.
//! - [`lifecycle`] - configuration, startup/shutdown, tracing.

pub mod api;
pub mod category_actor;
pub mod clients;
pub mod lifecycle;
pub mod model;
