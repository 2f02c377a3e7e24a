//! # Store Messages
//!
//! The request type carried from `ResourceClient` to `ResourceActor`. Each variant
//! holds its own oneshot sender for the reply.

use crate::entity::ActorEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request against one collection of documents.
///
/// - **Create**: build, validate and insert a document; replies with the stored document.
/// - **Get**: fetch one document by id.
/// - **List**: fetch every document in insertion order.
/// - **Update**: merge a [`ActorEntity::Update`] payload, validate, commit.
/// - **Delete**: remove a document; replies with what was removed.
/// - **Action**: run a [`ActorEntity::Action`] against one document, validate, commit.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short operation name, for logs and test diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::List { .. } => "list",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Delete { .. } => "delete",
            ResourceRequest::Action { .. } => "action",
        }
    }
}
