// src/domain/cart/mod.rs
pub mod entity;
pub mod repository;
pub mod totals;

pub use entity::{Cart, CartLine, Quantity};
pub use repository::CartRepository;
pub use totals::{CartTotals, TAX_RATE, compute_totals};
