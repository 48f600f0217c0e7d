// src/application/queries/carts.rs
use std::{collections::HashMap, sync::Arc};

use crate::application::{
    authorization::ensure_capability,
    dto::{AuthenticatedAccount, CartDto, CartTotalsDto, product_ids_of},
    error::ApplicationResult,
};
use crate::domain::{
    cart::{CartRepository, compute_totals},
    catalog::CatalogReadRepository,
};

pub struct CartQueryService {
    cart_repo: Arc<dyn CartRepository>,
    catalog_repo: Arc<dyn CatalogReadRepository>,
}

impl CartQueryService {
    pub fn new(
        cart_repo: Arc<dyn CartRepository>,
        catalog_repo: Arc<dyn CatalogReadRepository>,
    ) -> Self {
        Self {
            cart_repo,
            catalog_repo,
        }
    }

    /// Never fails for a valid account id: an account without stored rows
    /// gets an empty cart.
    pub async fn get_cart(&self, actor: &AuthenticatedAccount) -> ApplicationResult<CartDto> {
        ensure_capability(actor, "cart", "read")?;

        let cart = self.cart_repo.fetch(actor.id).await?;
        Ok(cart.into())
    }

    /// Totals against current catalog prices. Lines whose product no longer
    /// resolves are excluded from the sum.
    pub async fn totals(&self, actor: &AuthenticatedAccount) -> ApplicationResult<CartTotalsDto> {
        ensure_capability(actor, "cart", "read")?;

        let cart = self.cart_repo.fetch(actor.id).await?;

        let products = self
            .catalog_repo
            .find_by_ids(&product_ids_of(&cart))
            .await?;
        let prices: HashMap<_, _> = products
            .into_iter()
            .map(|product| (product.id, product.price))
            .collect();

        Ok(compute_totals(&cart, &prices).into())
    }
}
