//! # Store Errors
//!
//! Errors raised by the store itself, as opposed to the validation errors a
//! document type raises from its own hooks. Entity errors travel boxed inside
//! [`StoreError::EntityError`] and can be recovered with
//! [`StoreError::downcast_entity`].

/// Errors that can occur while talking to a `ResourceActor`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: actor closed")]
    ActorClosed,
    #[error("Store unavailable: actor dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the entity's own error type from an [`StoreError::EntityError`].
    ///
    /// Any other variant, or an entity error of a different type, is handed back
    /// unchanged in `Err`.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            StoreError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(StoreError::EntityError(inner)),
            },
            other => Err(other),
        }
    }

    /// True when the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::ActorClosed | StoreError::ActorDropped)
    }
}
