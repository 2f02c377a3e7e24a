//! # Resource Client
//!
//! The client half of the store: a cloneable handle that turns method calls into
//! [`ResourceRequest`]s and awaits the actor's reply.

use crate::entity::ActorEntity;
use crate::error::StoreError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to a `ResourceActor`.
///
/// Holds only a channel sender, so clones are cheap and can be handed to every request
/// handler. The actor stops once the last clone is dropped.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Creates a document and returns it as stored, id included.
    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every document in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.call(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    /// Merges `update` into the document and returns the post-update state.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.call(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Removes the document and returns what was removed.
    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
