use crate::category_actor::{CategoryAction, CategoryError};
use crate::model::{
    Category, CategoryCreate, CategoryId, CategoryUpdate, ProductCreate, ProductId, ProductUpdate,
};
use async_trait::async_trait;
use resource_store::{ActorClient, ResourceClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
///
/// `get`, `list` and `delete` come from [`ActorClient`]; the product operations are
/// [`CategoryAction`]s applied inside the actor, so each one is atomic per category.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Returns the category as it was committed.
    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        id: CategoryId,
        params: ProductCreate,
    ) -> Result<Category, CategoryError> {
        self.act(id, CategoryAction::AddProduct(params)).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: CategoryId,
        product_id: ProductId,
        update: ProductUpdate,
    ) -> Result<Category, CategoryError> {
        self.act(id, CategoryAction::UpdateProduct { product_id, update })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_product(
        &self,
        id: CategoryId,
        product_id: ProductId,
    ) -> Result<Category, CategoryError> {
        self.act(id, CategoryAction::RemoveProduct(product_id)).await
    }

    async fn act(&self, id: CategoryId, action: CategoryAction) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(_) => CategoryError::NotFound,
            e if e.is_unavailable() => CategoryError::Store(e.to_string()),
            e => e
                .downcast_entity::<CategoryError>()
                .unwrap_or_else(|other| CategoryError::Store(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_store::mock::{self, MockClient};

    fn category(name: &str) -> Category {
        Category::new(
            CategoryId::new(),
            CategoryCreate {
                name: name.to_string(),
                products: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_missing_category_maps_to_not_found() {
        let id = CategoryId::new();
        let mut mock = MockClient::<Category>::new();
        mock.expect_get(id).return_ok(None);
        mock.expect_delete(id)
            .return_err(StoreError::NotFound(id.to_string()));
        mock.expect_action(id)
            .return_err(StoreError::NotFound(id.to_string()));

        let client = CategoryClient::new(mock.client());
        assert!(client.get(id).await.unwrap().is_none());
        assert_eq!(client.delete(id).await.unwrap_err(), CategoryError::NotFound);
        assert_eq!(
            client.remove_product(id, ProductId::new()).await.unwrap_err(),
            CategoryError::NotFound
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let id = CategoryId::new();
        let mut mock = MockClient::<Category>::new();
        mock.expect_action(id)
            .return_err(StoreError::EntityError(Box::new(CategoryError::ProductNotFound)));
        mock.expect_update(id).return_err(StoreError::EntityError(Box::new(
            CategoryError::Validation("`name` is required".into()),
        )));

        let client = CategoryClient::new(mock.client());
        let err = client
            .update_product(id, ProductId::new(), ProductUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, CategoryError::ProductNotFound);

        let err = client
            .update_category(id, CategoryUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CategoryError::Validation(_)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_unavailable_store_maps_to_store_error() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_list().return_err(StoreError::ActorClosed);

        let client = CategoryClient::new(mock.client());
        assert!(matches!(
            client.list().await.unwrap_err(),
            CategoryError::Store(_)
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_add_product_sends_action_payload() {
        let (inner, mut receiver) = mock::create_mock_client::<Category>(4);
        let client = CategoryClient::new(inner);
        let stored = category("Toys");
        let id = stored.id;

        let request = tokio::spawn(async move {
            client
                .add_product(
                    id,
                    ProductCreate {
                        id: None,
                        name: "Kite".into(),
                        price: 15.0,
                        description: None,
                    },
                )
                .await
        });

        let (got_id, action, respond_to) = mock::expect_action(&mut receiver).await.unwrap();
        assert_eq!(got_id, id);
        let CategoryAction::AddProduct(params) = action else {
            panic!("expected AddProduct, got {action:?}");
        };
        assert_eq!(params.name, "Kite");

        let mut committed = stored.clone();
        committed.products.push(crate::model::Product::from_params(params));
        respond_to.send(Ok(committed.clone())).unwrap();

        assert_eq!(request.await.unwrap().unwrap(), committed);
    }
}
