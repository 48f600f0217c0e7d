// src/infrastructure/repositories/postgres_account.rs
use super::error::map_sqlx;
use crate::domain::account::{
    Account, AccountId, AccountRepository, AccountUpdate, DisplayName, EmailAddress, NewAccount,
    PasswordHash, Preferences, Role,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use std::str::FromStr;

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(&self, update: &AccountUpdate) -> QueryBuilder<'_, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE accounts SET ");
        let mut first = true;

        if let Some(name) = update.name.as_ref() {
            first = false;
            builder.push("name = ");
            builder.push_bind(name.as_str().to_owned());
        }

        if let Some(preferences) = update.preferences.as_ref() {
            if !first {
                builder.push(", ");
            }
            first = false;
            builder.push("preferences = ");
            builder.push_bind(Json(preferences.clone()));
        }

        if let Some(password_hash) = update.password_hash.as_ref() {
            if !first {
                builder.push(", ");
            }
            builder.push("password_hash = ");
            builder.push_bind(password_hash.as_str().to_owned());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING id, name, email, password_hash, role, preferences, created_at");

        builder
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    preferences: Json<Preferences>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: Role::from_str(&row.role)?,
            preferences: row.preferences.0,
            created_at: row.created_at,
        })
    }
}

const ACCOUNT_COLUMNS: &str = "id, name, email, password_hash, role, preferences, created_at";

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account> {
        let NewAccount {
            name,
            email,
            password_hash,
            role,
            preferences,
            created_at,
        } = new_account;

        // The unique constraint on email makes check-and-insert one atomic
        // statement; a concurrent duplicate registration loses cleanly.
        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (name, email, password_hash, role, preferences, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, email, password_hash, role, preferences, created_at",
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(Json(preferences))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Account::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn update(&self, update: AccountUpdate) -> DomainResult<Account> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = self.build_update_query(&update);

        let row = builder
            .build_query_as::<AccountRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("account not found".into()))?;

        Account::try_from(row)
    }
}
