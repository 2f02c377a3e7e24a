//! # ActorEntity Trait
//!
//! The contract a document type implements to be stored by a
//! [`ResourceActor`](crate::ResourceActor). It names the id, DTO, action, context and
//! error types, and provides the hooks the actor calls around every write.
//!
//! # Write Pipeline
//! Every write goes through the same steps inside the actor:
//!
//! 1. the hook for the operation mutates a working copy
//!    ([`from_create_params`](ActorEntity::from_create_params) +
//!    [`on_create`](ActorEntity::on_create),
//!    [`on_update`](ActorEntity::on_update) or [`handle_action`](ActorEntity::handle_action));
//! 2. [`validate`](ActorEntity::validate) checks the resulting document;
//! 3. only then is the working copy committed to the store.
//!
//! A failure at any step leaves the stored document untouched.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any document type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. `Context` is injected into every hook
/// when the actor is started with `run(context)`; use `()` when nothing is needed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this document. Ids are minted by the generator handed to
    /// [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload for creating a new document.
    type Create: Send + Sync + Debug;

    /// Payload for a whole-document update.
    type Update: Send + Sync + Debug;

    /// Document-specific writes that don't fit plain update (e.g. editing an embedded element).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type for this document.
    ///
    /// One error enum per document type; the store boxes it into
    /// [`StoreError::EntityError`](crate::StoreError::EntityError) and clients recover it with
    /// [`StoreError::downcast_entity`](crate::StoreError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the document from its store-assigned id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Check the document's invariants. Runs after every mutating hook, before commit.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after `from_create_params`, before validation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge an update payload into the working copy.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Apply a custom action to the working copy.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
