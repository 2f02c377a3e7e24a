//! # Resource Store
//!
//! An in-process document store built on the actor model. Each document type gets a
//! [`ResourceActor`] that owns its collection, mints ids, and applies writes one at a
//! time; callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Why an actor?
//!
//! - **Atomic single-document writes**: requests are applied sequentially, so a
//!   read-modify-write expressed as one [`ActorEntity::Action`] cannot interleave with
//!   another write to the same collection.
//! - **All-or-nothing**: hooks run against a working copy, [`ActorEntity::validate`] runs
//!   last, and the stored document changes only when everything succeeded.
//! - **No ambient globals**: the client is an explicit handle that callers inject.
//!
//! ## Layers
//!
//! 1. **Document** ([`ActorEntity`]) - ids, payloads, validation and hooks.
//! 2. **Server** ([`ResourceActor`]) - owns the collection, runs the write pipeline.
//! 3. **Client** ([`ResourceClient`], [`ActorClient`]) - typed request/response API.
//!
//! ## Example
//!
//! ```rust
//! use resource_store::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tag {
//!     id: u32,
//!     label: String,
//! }
//!
//! #[derive(Debug)] struct TagCreate { label: String }
//! #[derive(Debug)] struct TagUpdate { label: Option<String> }
//! #[derive(Debug)] enum TagAction {}
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("label is required")]
//! struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u32;
//!     type Create = TagCreate;
//!     type Update = TagUpdate;
//!     type Action = TagAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TagError;
//!
//!     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, TagError> {
//!         Ok(Self { id, label: params.label })
//!     }
//!
//!     fn validate(&self) -> Result<(), TagError> {
//!         if self.label.is_empty() { Err(TagError) } else { Ok(()) }
//!     }
//!
//!     async fn on_update(&mut self, update: TagUpdate, _: &()) -> Result<(), TagError> {
//!         if let Some(label) = update.label { self.label = label; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), TagError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::new(10, || 7);
//!     tokio::spawn(actor.run(()));
//!
//!     let tag = client.create(TagCreate { label: "sale".into() }).await.unwrap();
//!     assert_eq!(tag.id, 7);
//!
//!     // Rejected by validate(): the stored tag keeps its label.
//!     let rejected = client.update(7, TagUpdate { label: Some(String::new()) }).await;
//!     assert!(rejected.is_err());
//!     assert_eq!(client.get(7).await.unwrap().unwrap().label, "sale");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module stands in for an actor when testing client wrappers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::StoreError;
pub use message::{ResourceRequest, Response};
