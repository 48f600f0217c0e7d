// src/infrastructure/repositories/postgres_catalog.rs
use super::error::map_sqlx;
use crate::domain::catalog::{CatalogReadRepository, Product, ProductId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

/// Read-only view of the catalog collaborator's products table. This core
/// never writes to it; the admin editor owns mutations.
#[derive(Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    brand: String,
    price: Decimal,
    quantity: i64,
    unit: String,
    nutrition_score: Option<i32>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            name: row.name,
            brand: row.brand,
            price: row.price,
            quantity: row.quantity,
            unit: row.unit,
            nutrition_score: row.nutrition_score,
        })
    }
}

#[async_trait]
impl CatalogReadRepository for PostgresCatalogRepository {
    async fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, brand, price, quantity, unit, nutrition_score
             FROM products WHERE id = ANY($1)",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
