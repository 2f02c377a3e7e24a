//! Custom actions for the Category actor.
//!
//! Products live inside their category, so every product write is an action against the
//! parent document. The actor applies an action to a working copy and validates it before
//! committing, which makes each lookup-modify-save one atomic step.

use super::error::CategoryError;
use crate::model::{Category, Product, ProductCreate, ProductId, ProductUpdate};

/// Writes against the products embedded in one category.
///
/// Every action replies with the whole category as it was committed.
#[derive(Debug, Clone)]
pub enum CategoryAction {
    /// Appends a product. It gets a fresh id unless the payload carries one.
    AddProduct(ProductCreate),
    /// Merges a partial update into one product.
    UpdateProduct {
        product_id: ProductId,
        update: ProductUpdate,
    },
    /// Removes one product. Removing a product that isn't there is an error, not a no-op.
    RemoveProduct(ProductId),
}

impl Category {
    /// Runs `mutator` against the embedded product with `product_id`.
    ///
    /// # Errors
    /// [`CategoryError::ProductNotFound`] if no such product exists; the category is
    /// left untouched.
    pub fn update_embedded<F>(
        &mut self,
        product_id: &ProductId,
        mutator: F,
    ) -> Result<&Product, CategoryError>
    where
        F: FnOnce(&mut Product),
    {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == product_id)
            .ok_or(CategoryError::ProductNotFound)?;
        mutator(product);
        Ok(product)
    }

    /// Detaches the embedded product with `product_id` and returns it.
    pub fn remove_embedded(&mut self, product_id: &ProductId) -> Result<Product, CategoryError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == product_id)
            .ok_or(CategoryError::ProductNotFound)?;
        Ok(self.products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryCreate, CategoryId};

    fn with_one_product() -> Category {
        Category::new(
            CategoryId::new(),
            CategoryCreate {
                name: "Books".to_string(),
                products: vec![ProductCreate {
                    id: None,
                    name: "Dune".to_string(),
                    price: 12.5,
                    description: Some("paperback".to_string()),
                }],
            },
        )
    }

    #[test]
    fn test_update_embedded_applies_mutator() {
        let mut category = with_one_product();
        let id = category.products[0].id;

        let product = category
            .update_embedded(&id, |p| p.price = 9.0)
            .unwrap();
        assert_eq!(product.price, 9.0);
        assert_eq!(category.products[0].name, "Dune");
    }

    #[test]
    fn test_update_embedded_unknown_product() {
        let mut category = with_one_product();
        let before = category.clone();

        let err = category
            .update_embedded(&ProductId::new(), |p| p.price = 0.0)
            .unwrap_err();
        assert_eq!(err, CategoryError::ProductNotFound);
        assert_eq!(category, before);
    }

    #[test]
    fn test_remove_embedded_twice_fails_second_time() {
        let mut category = with_one_product();
        let id = category.products[0].id;

        assert_eq!(category.remove_embedded(&id).unwrap().name, "Dune");
        assert!(category.products.is_empty());
        assert_eq!(
            category.remove_embedded(&id).unwrap_err(),
            CategoryError::ProductNotFound
        );
    }
}
