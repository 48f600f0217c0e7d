// src/domain/cart/totals.rs
use crate::domain::cart::entity::Cart;
use crate::domain::catalog::ProductId;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Fixed sales-tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Computes subtotal/tax/total against current catalog prices. Lines whose
/// product cannot be resolved are excluded from the sum rather than failing
/// the whole computation.
pub fn compute_totals(cart: &Cart, prices: &HashMap<ProductId, Decimal>) -> CartTotals {
    let subtotal: Decimal = cart
        .items
        .iter()
        .filter_map(|line| {
            prices
                .get(&line.product_id)
                .map(|price| price * Decimal::from(line.quantity.get()))
        })
        .sum();

    let tax = (subtotal * TAX_RATE).round_dp(2);
    let total = subtotal + tax;

    CartTotals {
        subtotal,
        tax,
        total,
    }
}
