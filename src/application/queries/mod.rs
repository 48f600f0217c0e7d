// src/application/queries/mod.rs
pub mod accounts;
pub mod carts;
