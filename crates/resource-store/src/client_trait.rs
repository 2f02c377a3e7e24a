//! # ActorClient Trait
//!
//! Common interface for document-specific clients. Implementors supply the inner
//! [`ResourceClient`] and an error mapping; `get`, `list` and `delete` come for free.
use crate::{ActorEntity, ResourceClient, StoreError};
use async_trait::async_trait;

/// Trait for document-specific clients to inherit the read and delete operations.
///
/// # Example
///
/// ```rust
/// use resource_store::{ActorClient, ActorEntity, ResourceClient, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
///     type Action = NoteAction; type ActionResult = (); type Context = (); type Error = NoteError;
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), NoteError> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> NoteError {
///         NoteError(e.to_string())
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The document-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the document-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every document.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a document by id, returning the removed document.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
