use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

use super::product::{Product, ProductCreate};

/// Store-assigned identifier of a category document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Top-level catalog document. Owns its products; their order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Category {
    pub fn new(id: CategoryId, params: CategoryCreate) -> Self {
        Self {
            id,
            name: params.name.trim().to_string(),
            products: params.products.into_iter().map(Product::from_params).collect(),
        }
    }

    /// Overlays the fields present in `update`. A `products` list replaces the whole
    /// embedded sequence.
    pub fn merge(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(products) = update.products {
            self.products = products.into_iter().map(Product::from_params).collect();
        }
    }

    /// Checks the document as a whole: its name, every embedded product, and that no
    /// two products share an id.
    pub fn check(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("`name` is required".to_string());
        }
        let mut seen = HashSet::with_capacity(self.products.len());
        for (i, product) in self.products.iter().enumerate() {
            product.check(&format!("products.{i}"))?;
            if !seen.insert(product.id) {
                return Err(format!("`products.{i}._id` duplicates {}", product.id));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub products: Vec<ProductCreate>,
}

/// Partial update of a category. Absent (or `null`) fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub products: Option<Vec<ProductCreate>>,
}
