// src/domain/catalog/mod.rs
//
// The product catalog is an external collaborator: this core reads prices
// from it and never mutates it.
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub quantity: i64,
    pub unit: String,
    pub nutrition_score: Option<i32>,
}

#[async_trait]
pub trait CatalogReadRepository: Send + Sync {
    /// Resolve current products for the given ids. Unknown ids are simply
    /// missing from the result, never an error.
    async fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>>;
}
