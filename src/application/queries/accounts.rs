// src/application/queries/accounts.rs
use std::sync::Arc;

use crate::application::{
    authorization::ensure_capability,
    dto::{AccountDto, AuthenticatedAccount},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::account::AccountRepository;

pub struct AccountQueryService {
    account_repo: Arc<dyn AccountRepository>,
}

impl AccountQueryService {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }

    pub async fn get_profile(
        &self,
        actor: &AuthenticatedAccount,
    ) -> ApplicationResult<AccountDto> {
        ensure_capability(actor, "profile", "read")?;

        let account = self
            .account_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        Ok(account.into())
    }
}
