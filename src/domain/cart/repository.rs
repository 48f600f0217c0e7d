// src/domain/cart/repository.rs
use crate::domain::account::AccountId;
use crate::domain::cart::entity::{Cart, Quantity};
use crate::domain::catalog::ProductId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Per-account cart persistence. Every mutation is atomic at the line level:
/// increment-or-insert, exact set, and delete each happen in a single store
/// operation so concurrent mutations on the same account cannot lose updates.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns the stored cart, or an empty cart when no rows exist.
    async fn fetch(&self, account_id: AccountId) -> DomainResult<Cart>;

    /// Append-or-increment: adds a new line, or increments an existing line's
    /// quantity by the given amount, in one atomic operation.
    async fn upsert_increment(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> DomainResult<Cart>;

    /// Sets a line's quantity exactly. Fails with `NotFound` when the product
    /// is not in the cart.
    async fn set_quantity(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> DomainResult<Cart>;

    /// Removes the line if present. Absence is not an error.
    async fn remove_line(&self, account_id: AccountId, product_id: ProductId)
    -> DomainResult<Cart>;
}
