// src/application/dto.rs
use crate::domain::{
    account::{Account, AccountId, Capability, Preferences, Role},
    cart::{Cart, CartTotals},
    catalog::ProductId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

/// Public account projection. The credential hash is deliberately absent and
/// must never appear in any outward-facing shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub role: Role,
    #[schema(value_type = Object)]
    pub preferences: Preferences,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.into(),
            name: account.name.to_string(),
            email: account.email.to_string(),
            role: account.role,
            preferences: account.preferences,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Claims resolved from a verified session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub email: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedAccount {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

/// Identity and role claims to seal into a newly issued token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub account_id: AccountId,
    pub email: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

impl TokenSubject {
    pub fn for_account(account: &Account) -> Self {
        Self {
            account_id: account.id,
            email: account.email.to_string(),
            role: account.role,
            capabilities: account.role.default_capabilities(),
        }
    }
}

// Cart responses use the same camelCase keys the requests accept.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub account_id: i64,
    pub items: Vec<CartLineDto>,
}

impl From<Cart> for CartDto {
    fn from(cart: Cart) -> Self {
        Self {
            account_id: cart.account_id.into(),
            items: cart
                .items
                .into_iter()
                .map(|line| CartLineDto {
                    product_id: line.product_id.into(),
                    quantity: line.quantity.get(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartTotalsDto {
    #[schema(value_type = String)]
    pub subtotal: Decimal,
    #[schema(value_type = String)]
    pub tax: Decimal,
    #[schema(value_type = String)]
    pub total: Decimal,
}

impl From<CartTotals> for CartTotalsDto {
    fn from(totals: CartTotals) -> Self {
        Self {
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub brand: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub quantity: i64,
    pub unit: String,
    pub nutrition_score: Option<i32>,
}

impl From<crate::domain::catalog::Product> for ProductDto {
    fn from(product: crate::domain::catalog::Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name,
            brand: product.brand,
            price: product.price,
            quantity: product.quantity,
            unit: product.unit,
            nutrition_score: product.nutrition_score,
        }
    }
}

pub fn product_ids_of(cart: &Cart) -> Vec<ProductId> {
    cart.items.iter().map(|line| line.product_id).collect()
}
