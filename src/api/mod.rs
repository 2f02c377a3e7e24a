//! HTTP surface of the catalog, built on axum.
//!
//! Success bodies are the raw resource; every failure is `{"error": "<message>"}` with the
//! status from [`ApiError::status`].

pub mod error;
pub mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::router;
