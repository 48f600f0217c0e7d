// src/application/commands/mod.rs
pub mod accounts;
pub mod carts;
