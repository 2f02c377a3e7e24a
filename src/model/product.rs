//! A catalog item embedded in exactly one [`Category`](crate::model::Category).
//!
//! Products have no collection of their own: they are created, changed and removed
//! through [`CategoryAction`](crate::category_actor::CategoryAction)s against their parent,
//! and persisted by writing the parent document.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Store-assigned identifier of an embedded product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(serialize_with = "price::serialize")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Builds a product from its payload, trimming text fields. A payload without an
    /// `_id` gets a fresh one.
    pub fn from_params(params: ProductCreate) -> Self {
        Self {
            id: params.id.unwrap_or_default(),
            name: params.name.trim().to_string(),
            price: params.price,
            description: params.description.map(|d| d.trim().to_string()),
        }
    }

    /// Overlays the fields present in `update`.
    pub fn merge(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description.trim().to_string());
        }
    }

    /// Checks the product's own invariants. `path` prefixes field names in messages,
    /// e.g. `products.2`.
    pub fn check(&self, path: &str) -> Result<(), String> {
        if self.name.is_empty() {
            return Err(format!("`{path}.name` is required"));
        }
        if !self.price.is_finite() {
            return Err(format!("`{path}.price` must be a number"));
        }
        if self.price < 0.0 {
            return Err(format!(
                "`{path}.price` ({}) is less than minimum allowed value (0)",
                self.price
            ));
        }
        Ok(())
    }
}

/// Payload for adding a product, or for one entry of a replacement product list.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    /// Keeps an existing identity when a whole product list is replaced.
    #[serde(rename = "_id", default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update of one product. Absent (or `null`) fields are left unchanged, so an
/// update can replace a description but never clear it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Writes whole-number prices as JSON integers (`499`, not `499.0`).
mod price {
    use serde::Serializer;

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    pub fn serialize<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if price.fract() == 0.0 && price.abs() < MAX_EXACT {
            serializer.serialize_i64(*price as i64)
        } else {
            serializer.serialize_f64(*price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product::from_params(ProductCreate {
            id: None,
            name: "  Phone ".to_string(),
            price: 499.0,
            description: Some(" flagship  ".to_string()),
        })
    }

    #[test]
    fn test_from_params_trims_text() {
        let product = phone();
        assert_eq!(product.name, "Phone");
        assert_eq!(product.description.as_deref(), Some("flagship"));
        assert!(product.check("products.0").is_ok());
    }

    #[test]
    fn test_merge_changes_only_given_fields() {
        let mut product = phone();
        product.merge(ProductUpdate {
            price: Some(450.0),
            ..Default::default()
        });
        assert_eq!(product.price, 450.0);
        assert_eq!(product.name, "Phone");
        assert_eq!(product.description.as_deref(), Some("flagship"));
    }

    #[test]
    fn test_null_description_leaves_it_unchanged() {
        let mut product = phone();
        let update: ProductUpdate =
            serde_json::from_value(serde_json::json!({ "description": null })).unwrap();
        product.merge(update);
        assert_eq!(product.description.as_deref(), Some("flagship"));
    }

    #[test]
    fn test_check_rejects_negative_price_and_blank_name() {
        let mut product = phone();
        product.price = -1.0;
        let err = product.check("products.0").unwrap_err();
        assert!(err.contains("products.0.price"), "{err}");

        let mut product = phone();
        product.name = String::new();
        assert_eq!(product.check("products.1").unwrap_err(), "`products.1.name` is required");
    }

    #[test]
    fn test_price_serializes_like_json_numbers() {
        let mut product = phone();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(499));

        product.price = 19.99;
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(19.99));
    }

    #[test]
    fn test_description_omitted_when_absent() {
        let mut product = phone();
        product.description = None;
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("description").is_none());
        assert!(json["_id"].is_string());
    }

    #[test]
    fn test_product_id_parsing() {
        let id = ProductId::new();
        assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
        assert!("not-an-id".parse::<ProductId>().is_err());
    }
}
