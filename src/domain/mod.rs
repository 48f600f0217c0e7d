// src/domain/mod.rs
pub mod account;
pub mod cart;
pub mod catalog;
pub mod errors;
