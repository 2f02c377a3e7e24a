use super::handlers::{
    add_product, create_category, delete_category, get_category, list_categories,
    method_not_allowed, not_found, remove_product, update_category, update_product,
};
use crate::clients::CategoryClient;
use axum::routing::{get, post, put};
use axum::Router;

/// Builds the catalog router. The client is the only state handlers share.
///
/// Unknown paths get 404 and known paths with an unsupported method get 405, both in the
/// same `{"error": ..}` envelope as every other failure.
pub fn router(client: CategoryClient) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories)
                .post(create_category)
                .fallback(method_not_allowed),
        )
        .route(
            "/categories/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category)
                .fallback(method_not_allowed),
        )
        .route(
            "/categories/:id/products",
            post(add_product).fallback(method_not_allowed),
        )
        .route(
            "/categories/:id/products/:product_id",
            put(update_product)
                .delete(remove_product)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(client)
}
