//! # Resource Actor
//!
//! The server half of the store. A `ResourceActor<T>` owns one collection of `T` documents
//! and applies requests from its channel one at a time, so every write to a single document
//! is atomic with respect to every other write. No locks are involved: the collection is
//! owned by the actor's task.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::StoreError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of documents.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(buffer_size, next_id)` returns the actor and a client.
/// 2.  **Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: clone the client wherever requests are issued.
///
/// ```rust
/// use resource_store::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, body: String }
/// #[derive(Debug)] struct NoteCreate { body: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
///     type Action = NoteAction; type ActionResult = (); type Context = (); type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, body: params.body })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), NoteError> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let counter = std::sync::atomic::AtomicU32::new(1);
///     let (actor, client) = ResourceActor::<Note>::new(10, move || {
///         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
///     });
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { body: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: mint an id, `from_create_params`, `on_create`, `validate`, insert.
/// * **Get** / **List**: clone out of the collection; `List` keeps insertion order.
/// * **Update** / **Action**: clone the stored document, run the hook on the copy,
///   `validate`, then replace the stored document. An error at any step discards the copy.
/// * **Delete**: `on_delete`, then remove and hand back the removed document.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel. Senders wait while it is full.
    /// * `next_id` - id generator, called once per successful or failed create.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Category" instead of "catalog_api::model::category::Category"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: Box::new(next_id),
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let _ = respond_to.send(self.action(id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T, StoreError> {
        let id = (self.next_id)();
        let built = async {
            let mut item = T::from_create_params(id.clone(), params)?;
            item.on_create(ctx).await?;
            item.validate()?;
            Ok::<_, T::Error>(item)
        }
        .await;

        match built {
            Ok(item) => {
                if self.store.insert(id.clone(), item.clone()).is_none() {
                    self.order.push(id.clone());
                }
                info!(entity_type = self.entity_type, %id, size = self.store.len(), "Created");
                Ok(item)
            }
            Err(e) => {
                warn!(entity_type = self.entity_type, error = %e, "Create failed");
                Err(entity_error(e))
            }
        }
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, StoreError> {
        let mut draft = self.working_copy(&id)?;
        let applied = async {
            draft.on_update(update, ctx).await?;
            draft.validate()
        }
        .await;

        if let Err(e) = applied {
            warn!(entity_type = self.entity_type, %id, error = %e, "Update failed");
            return Err(entity_error(e));
        }
        self.store.insert(id.clone(), draft.clone());
        info!(entity_type = self.entity_type, %id, "Updated");
        Ok(draft)
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, StoreError> {
        let mut draft = self.working_copy(&id)?;
        let applied = async {
            let result = draft.handle_action(action, ctx).await?;
            draft.validate()?;
            Ok::<_, T::Error>(result)
        }
        .await;

        match applied {
            Ok(result) => {
                self.store.insert(id.clone(), draft);
                info!(entity_type = self.entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type = self.entity_type, %id, error = %e, "Action failed");
                Err(entity_error(e))
            }
        }
    }

    async fn delete(&mut self, id: T::Id, ctx: &T::Context) -> Result<T, StoreError> {
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type = self.entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type = self.entity_type, %id, error = %e, "on_delete failed");
            return Err(entity_error(e));
        }

        self.order.retain(|existing| existing != &id);
        let removed = self
            .store
            .remove(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!(entity_type = self.entity_type, %id, size = self.store.len(), "Deleted");
        Ok(removed)
    }

    fn working_copy(&self, id: &T::Id) -> Result<T, StoreError> {
        self.store.get(id).cloned().ok_or_else(|| {
            warn!(entity_type = self.entity_type, %id, "Not found");
            StoreError::NotFound(id.to_string())
        })
    }
}

fn entity_error<E>(e: E) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
{
    StoreError::EntityError(Box::new(e))
}
