// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_account;
mod postgres_cart;
mod postgres_catalog;

pub use postgres_account::PostgresAccountRepository;
pub use postgres_cart::PostgresCartRepository;
pub use postgres_catalog::PostgresCatalogRepository;
