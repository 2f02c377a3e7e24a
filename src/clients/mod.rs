//! Typed wrappers around [`ResourceClient`](resource_store::ResourceClient).

pub mod category_client;

pub use category_client::*;
