// src/infrastructure/repositories/postgres_cart.rs
use super::error::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::cart::{Cart, CartLine, CartRepository, Quantity};
use crate::domain::catalog::ProductId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, account_id: AccountId) -> DomainResult<Cart> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            "SELECT product_id, quantity FROM cart_items
             WHERE account_id = $1 ORDER BY id",
        )
        .bind(i64::from(account_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(CartLine::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Cart { account_id, items })
    }
}

// `Quantity` is already bounded to the INTEGER range, so this can only fail
// if the invariant is broken upstream; reject rather than clamp.
fn stored_quantity(quantity: Quantity) -> DomainResult<i32> {
    i32::try_from(quantity.get())
        .map_err(|_| DomainError::Validation("quantity out of storage range".into()))
}

#[derive(Debug, FromRow)]
struct CartItemRow {
    product_id: i64,
    quantity: i32,
}

impl TryFrom<CartItemRow> for CartLine {
    type Error = DomainError;

    fn try_from(row: CartItemRow) -> Result<Self, Self::Error> {
        Ok(CartLine {
            product_id: ProductId::new(row.product_id)?,
            quantity: Quantity::new(u32::try_from(row.quantity).map_err(|_| {
                DomainError::Persistence("stored quantity out of range".into())
            })?)?,
        })
    }
}

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn fetch(&self, account_id: AccountId) -> DomainResult<Cart> {
        self.load(account_id).await
    }

    async fn upsert_increment(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> DomainResult<Cart> {
        // One statement: insert the line or bump the existing quantity.
        // Concurrent adds for the same line serialize on the row, so no
        // update is ever lost to a read-modify-write race.
        sqlx::query(
            "INSERT INTO cart_items (account_id, product_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT cart_items_account_product_key
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity",
        )
        .bind(i64::from(account_id))
        .bind(i64::from(product_id))
        .bind(stored_quantity(quantity)?)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.load(account_id).await
    }

    async fn set_quantity(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> DomainResult<Cart> {
        let result = sqlx::query(
            "UPDATE cart_items SET quantity = $3
             WHERE account_id = $1 AND product_id = $2",
        )
        .bind(i64::from(account_id))
        .bind(i64::from(product_id))
        .bind(stored_quantity(quantity)?)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not in cart".into()));
        }

        self.load(account_id).await
    }

    async fn remove_line(
        &self,
        account_id: AccountId,
        product_id: ProductId,
    ) -> DomainResult<Cart> {
        sqlx::query("DELETE FROM cart_items WHERE account_id = $1 AND product_id = $2")
            .bind(i64::from(account_id))
            .bind(i64::from(product_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.load(account_id).await
    }
}
