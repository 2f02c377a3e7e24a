//! # Mocking Utilities
//!
//! Stand-ins for a `ResourceActor` when the code under test is a client wrapper rather than
//! the store itself.
//!
//! | | [`MockClient`] | [`create_mock_client`] + `expect_*` | Real actor |
//! |---|---|---|---|
//! | **Style** | scripted replies, checked in order | inspect each request by hand | real state |
//! | **Asserts on payload** | id only | full payload | via results |
//! | **Error injection** | `return_err` | send any `Err` | needs the right state |
//!
//! ## Scripted replies
//!
//! ```rust
//! use resource_store::mock::MockClient;
//! use resource_store::{ActorEntity, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
//!     type Action = NoteAction; type ActionResult = (); type Context = (); type Error = NoteError;
//!     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), NoteError> { Ok(()) }
//!     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), NoteError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note { id: 1 }));
//!     mock.expect_list().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(matches!(client.list().await, Err(StoreError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::StoreError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// SCRIPTED MOCK
// =============================================================================

/// One scripted reply, consumed by the next request.
enum Expectation<T: ActorEntity> {
    Create(Result<T, StoreError>),
    Get(T::Id, Result<Option<T>, StoreError>),
    List(Result<Vec<T>, StoreError>),
    Update(T::Id, Result<T, StoreError>),
    Delete(T::Id, Result<T, StoreError>),
    Action(T::Id, Result<T::ActionResult, StoreError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "create",
            Expectation::Get(..) => "get",
            Expectation::List(_) => "list",
            Expectation::Update(..) => "update",
            Expectation::Delete(..) => "delete",
            Expectation::Action(..) => "action",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client backed by a queue of scripted replies instead of a real store.
///
/// Requests must arrive in the order the expectations were registered, and requests that
/// carry an id must carry the expected one. A mismatched request gets no reply (the caller
/// sees [`StoreError::ActorDropped`]) and is reported by [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failed = failures.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();
                if let Err(msg) = answer(request, expectation) {
                    failed.lock().expect("mock failures poisoned").push(msg);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(Expectation::Create))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |response| Expectation::Get(id, response)))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(Expectation::List))
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |response| Expectation::Update(id, response)))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |response| Expectation::Delete(id, response)))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Box::new(move |response| Expectation::Action(id, response)))
    }

    /// Panics if any request was unexpected or any expectation is still pending.
    pub fn verify(&self) {
        let failures = self.failures.lock().expect("mock failures poisoned");
        if !failures.is_empty() {
            panic!("Unexpected requests: {}", failures.join("; "));
        }
        let remaining = self.expectations.lock().expect("mock queue poisoned");
        if !remaining.is_empty() {
            let pending: Vec<_> = remaining.iter().map(Expectation::kind).collect();
            panic!("Not all expectations were met. Remaining: {pending:?}");
        }
    }

    fn builder<R>(&self, make: ExpectationFn<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make,
        }
    }
}

type ExpectationFn<T, R> = Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T>>;

/// Registers the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: ExpectationFn<T, R>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back(expectation);
    }
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
            same_id("get", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update(expected, response)),
        ) => {
            same_id("update", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete(expected, response)),
        ) => {
            same_id("delete", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action(expected, response)),
        ) => {
            same_id("action", &expected, &id)?;
            let _ = respond_to.send(response);
        }
        (request, expectation) => {
            return Err(format!(
                "got {} while expecting {}",
                request.kind(),
                expectation.as_ref().map_or("nothing", Expectation::kind)
            ));
        }
    }
    Ok(())
}

fn same_id<I>(kind: &str, expected: &I, actual: &I) -> Result<(), String>
where
    I: PartialEq + std::fmt::Display,
{
    if expected == actual {
        Ok(())
    } else {
        Err(format!("{kind} for id {actual}, expected id {expected}"))
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// Tests pull requests off the receiver with the `expect_*` helpers, assert on the full
/// payload, and answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfUpdate;

    #[derive(Debug)]
    enum ShelfAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Action = ShelfAction;
        type ActionResult = ();
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn shelf(id: u32, label: &str) -> Shelf {
        Shelf {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_payload() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ShelfCreate {
                    label: "Top".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "Top");
        responder.send(Ok(shelf(1, "Top"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, shelf(1, "Top"));
    }

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_create().return_ok(shelf(1, "Top"));
        mock.expect_list().return_ok(vec![shelf(1, "Top")]);
        mock.expect_delete(1).return_ok(shelf(1, "Top"));
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let created = client
            .create(ShelfCreate {
                label: "Top".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(client.delete(1).await.unwrap().label, "Top");
        assert!(client.get(1).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_id_gets_no_reply() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get(1).return_ok(Some(shelf(1, "Top")));

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(StoreError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_pending_expectations() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_update(3).return_err(StoreError::NotFound("3".into()));
        mock.verify();
    }
}
