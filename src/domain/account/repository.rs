// src/domain/account/repository.rs
use crate::domain::account::entity::{Account, AccountUpdate, NewAccount};
use crate::domain::account::value_objects::{AccountId, EmailAddress};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account. Email uniqueness is enforced by the store in the
    /// same statement as the insert; a violation surfaces as
    /// `DomainError::DuplicateEmail`.
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Account>>;

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    /// Apply a partial mutation. Fails with `NotFound` when the id is absent.
    async fn update(&self, update: AccountUpdate) -> DomainResult<Account>;
}
