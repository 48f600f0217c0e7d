// src/domain/cart/entity.rs
use crate::domain::account::AccountId;
use crate::domain::catalog::ProductId;
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;

/// A cart line quantity. Always at least one; callers wanting zero must
/// remove the line instead. Bounded above by what the store's INTEGER
/// column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const MAX: u32 = i32::MAX as u32;

    pub fn new(value: u32) -> DomainResult<Self> {
        if value < 1 {
            Err(DomainError::Validation("quantity must be at least 1".into()))
        } else if value > Self::MAX {
            Err(DomainError::Validation(format!(
                "quantity must not exceed {}",
                Self::MAX
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Ordered line items for one account. Created lazily: an account with no
/// stored rows simply has an empty cart.
#[derive(Debug, Clone)]
pub struct Cart {
    pub account_id: AccountId,
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn empty(account_id: AccountId) -> Self {
        Self {
            account_id,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product_id == product_id)
    }
}
