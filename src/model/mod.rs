//! Catalog documents and the payloads that create and change them.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
