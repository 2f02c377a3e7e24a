//! Category documents in the store, with their embedded product writes.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CategoryClient;
use crate::model::{Category, CategoryId};
use resource_store::ResourceActor;

/// Creates a new Category actor and its client. Ids are random UUIDs.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, CategoryId::new);
    let client = CategoryClient::new(generic_client);

    (actor, client)
}
