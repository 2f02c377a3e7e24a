//! [`ActorEntity`] implementation that lets the store manage [`Category`] documents.

use super::actions::CategoryAction;
use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate, Product};
use async_trait::async_trait;
use resource_store::ActorEntity;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = Category;
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        Ok(Category::new(id, params))
    }

    fn validate(&self) -> Result<(), CategoryError> {
        self.check().map_err(CategoryError::Validation)
    }

    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), CategoryError> {
        self.merge(update);
        Ok(())
    }

    /// Applies a product write and returns the category as it will be committed.
    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &(),
    ) -> Result<Category, CategoryError> {
        match action {
            CategoryAction::AddProduct(params) => {
                self.products.push(Product::from_params(params));
            }
            CategoryAction::UpdateProduct { product_id, update } => {
                self.update_embedded(&product_id, |product| product.merge(update))?;
            }
            CategoryAction::RemoveProduct(product_id) => {
                self.remove_embedded(&product_id)?;
            }
        }
        Ok(self.clone())
    }
}
