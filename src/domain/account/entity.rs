// src/domain/account/entity.rs
use crate::domain::account::value_objects::{
    AccountId, DisplayName, EmailAddress, PasswordHash, Preferences, Role,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    pub fn new(
        name: DisplayName,
        email: EmailAddress,
        password_hash: PasswordHash,
        role: Role,
        preferences: Preferences,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            role,
            preferences,
            created_at,
        }
    }
}

/// Partial account mutation. Email and role are immutable once assigned and
/// deliberately have no slot here.
#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub id: AccountId,
    pub name: Option<DisplayName>,
    pub preferences: Option<Preferences>,
    pub password_hash: Option<PasswordHash>,
}

impl AccountUpdate {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            name: None,
            preferences: None,
            password_hash: None,
        }
    }

    pub fn with_name(mut self, name: DisplayName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.preferences.is_none() && self.password_hash.is_none()
    }
}
