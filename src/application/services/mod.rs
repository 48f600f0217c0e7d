// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{accounts::AccountCommandService, carts::CartCommandService},
        ports::{
            security::{PasswordHasher, TokenService},
            time::Clock,
        },
        queries::{accounts::AccountQueryService, carts::CartQueryService},
    },
    domain::{account::AccountRepository, cart::CartRepository, catalog::CatalogReadRepository},
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub cart_commands: Arc<CartCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    pub cart_queries: Arc<CartQueryService>,
    token_service: Arc<dyn TokenService>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        cart_repo: Arc<dyn CartRepository>,
        catalog_repo: Arc<dyn CatalogReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_service),
            Arc::clone(&clock),
        ));

        let cart_commands = Arc::new(CartCommandService::new(Arc::clone(&cart_repo)));

        let account_queries = Arc::new(AccountQueryService::new(Arc::clone(&account_repo)));
        let cart_queries = Arc::new(CartQueryService::new(
            Arc::clone(&cart_repo),
            Arc::clone(&catalog_repo),
        ));

        Self {
            account_commands,
            cart_commands,
            account_queries,
            cart_queries,
            token_service,
        }
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        Arc::clone(&self.token_service)
    }
}
