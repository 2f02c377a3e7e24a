//! Request handlers. Each one parses its input, makes exactly one store call through the
//! injected [`CategoryClient`], and serializes the result.

use super::error::ApiError;
use crate::clients::CategoryClient;
use crate::model::{
    Category, CategoryCreate, CategoryId, CategoryUpdate, ProductCreate, ProductId, ProductUpdate,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resource_store::ActorClient;
use serde::Serialize;
use std::str::FromStr;

type Body<T> = Result<Json<T>, JsonRejection>;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Reply to a product removal: a confirmation plus the category as committed.
#[derive(Debug, Serialize)]
pub struct ProductRemoved {
    pub message: &'static str,
    pub category: Category,
}

fn parse_id<I: FromStr>(raw: &str, what: &str) -> Result<I, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("Invalid {what} id: {raw}")))
}

pub async fn create_category(
    State(client): State<CategoryClient>,
    body: Body<CategoryCreate>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(params) = body?;
    let category = client.create_category(params).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list_categories(
    State(client): State<CategoryClient>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(client.list().await?))
}

pub async fn get_category(
    State(client): State<CategoryClient>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    client
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))
}

pub async fn update_category(
    State(client): State<CategoryClient>,
    Path(id): Path<String>,
    body: Body<CategoryUpdate>,
) -> Result<Json<Category>, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    let Json(update) = body?;
    Ok(Json(client.update_category(id, update).await?))
}

pub async fn delete_category(
    State(client): State<CategoryClient>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    client.delete(id).await?;
    Ok(Json(Message {
        message: "Category deleted successfully",
    }))
}

pub async fn add_product(
    State(client): State<CategoryClient>,
    Path(id): Path<String>,
    body: Body<ProductCreate>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    let Json(params) = body?;
    let category = client.add_product(id, params).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_product(
    State(client): State<CategoryClient>,
    Path((id, product_id)): Path<(String, String)>,
    body: Body<ProductUpdate>,
) -> Result<Json<Category>, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    let product_id: ProductId = parse_id(&product_id, "product")?;
    let Json(update) = body?;
    Ok(Json(client.update_product(id, product_id, update).await?))
}

pub async fn remove_product(
    State(client): State<CategoryClient>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<Json<ProductRemoved>, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    let product_id: ProductId = parse_id(&product_id, "product")?;
    let category = client.remove_product(id, product_id).await?;
    Ok(Json(ProductRemoved {
        message: "Product removed",
        category,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
