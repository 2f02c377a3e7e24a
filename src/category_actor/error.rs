//! Error types for the Category actor.

use thiserror::Error;

/// Errors that can occur during category and embedded product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// No category with the requested id.
    #[error("Category not found")]
    NotFound,

    /// The category exists but holds no product with the requested id.
    #[error("Product not found")]
    ProductNotFound,

    /// The document failed validation after a write was applied. Nothing was persisted.
    #[error("Category validation failed: {0}")]
    Validation(String),

    /// The store could not be reached.
    #[error("Category store error: {0}")]
    Store(String),
}
