// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use pantry_core::application::ApplicationResult;
use pantry_core::application::dto::{AuthTokenDto, AuthenticatedAccount, TokenSubject};
use pantry_core::application::error::ApplicationError;
use pantry_core::application::ports::security::{PasswordHasher, TokenService};
use pantry_core::application::ports::time::Clock;
use pantry_core::domain::account::{
    Account, AccountId, AccountRepository, AccountUpdate, EmailAddress, NewAccount, Role,
};
use pantry_core::domain::cart::{Cart, CartLine, CartRepository, Quantity};
use pantry_core::domain::catalog::{CatalogReadRepository, Product, ProductId};
use pantry_core::domain::errors::{DomainError, DomainResult};

/* ----------------------------- account store ------------------------------ */

pub struct InMemoryAccountRepo {
    inner: Mutex<HashMap<i64, Account>>,
    next_id: AtomicI64,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn insert(&self, new_account: NewAccount) -> DomainResult<Account> {
        // duplicate check and insert happen under one lock, mirroring the
        // store-level unique constraint
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|a| a.email.as_str() == new_account.email.as_str())
        {
            return Err(DomainError::DuplicateEmail("email already in use".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let account = Account {
            id: AccountId::new(id)?,
            name: new_account.name,
            email: new_account.email,
            password_hash: new_account.password_hash,
            role: new_account.role,
            preferences: new_account.preferences,
            created_at: new_account.created_at,
        };
        map.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Account>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|a| a.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: AccountUpdate) -> DomainResult<Account> {
        let mut map = self.inner.lock().unwrap();
        let account = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("account not found".into()))?;

        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(preferences) = update.preferences {
            account.preferences = preferences;
        }
        if let Some(password_hash) = update.password_hash {
            account.password_hash = password_hash;
        }

        Ok(account.clone())
    }
}

/* ------------------------------- cart store ------------------------------- */

/// Line mutations run under a single lock, giving the same atomicity the
/// Postgres upsert provides.
#[derive(Default)]
pub struct InMemoryCartRepo {
    inner: Mutex<HashMap<i64, Vec<(i64, u32)>>>,
}

impl InMemoryCartRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_cart(account_id: AccountId, lines: &[(i64, u32)]) -> DomainResult<Cart> {
        let items = lines
            .iter()
            .map(|&(pid, qty)| {
                Ok(CartLine {
                    product_id: ProductId::new(pid)?,
                    quantity: Quantity::new(qty)?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Cart { account_id, items })
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepo {
    async fn fetch(&self, account_id: AccountId) -> DomainResult<Cart> {
        let map = self.inner.lock().unwrap();
        let lines = map.get(&i64::from(account_id)).cloned().unwrap_or_default();
        Self::to_cart(account_id, &lines)
    }

    async fn upsert_increment(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> DomainResult<Cart> {
        let mut map = self.inner.lock().unwrap();
        let lines = map.entry(i64::from(account_id)).or_default();
        let pid = i64::from(product_id);

        if let Some(line) = lines.iter_mut().find(|(p, _)| *p == pid) {
            line.1 += quantity.get();
        } else {
            lines.push((pid, quantity.get()));
        }

        Self::to_cart(account_id, lines)
    }

    async fn set_quantity(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
    ) -> DomainResult<Cart> {
        let mut map = self.inner.lock().unwrap();
        let lines = map.entry(i64::from(account_id)).or_default();
        let pid = i64::from(product_id);

        let line = lines
            .iter_mut()
            .find(|(p, _)| *p == pid)
            .ok_or_else(|| DomainError::NotFound("product not in cart".into()))?;
        line.1 = quantity.get();

        Self::to_cart(account_id, lines)
    }

    async fn remove_line(
        &self,
        account_id: AccountId,
        product_id: ProductId,
    ) -> DomainResult<Cart> {
        let mut map = self.inner.lock().unwrap();
        let lines = map.entry(i64::from(account_id)).or_default();
        lines.retain(|(p, _)| *p != i64::from(product_id));

        Self::to_cart(account_id, lines)
    }
}

/* -------------------------------- catalog --------------------------------- */

pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    pub fn with_prices(prices: &[(i64, Decimal)]) -> Self {
        let products = prices
            .iter()
            .map(|&(id, price)| Product {
                id: ProductId::new(id).unwrap(),
                name: format!("product-{id}"),
                brand: "house".into(),
                price,
                quantity: 100,
                unit: "each".into(),
                nutrition_score: None,
            })
            .collect();
        Self { products }
    }
}

#[async_trait]
impl CatalogReadRepository for StaticCatalog {
    async fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

/* --------------------------------- ports ---------------------------------- */

/// Deterministic stand-in for Argon2: the digest is a reversible marker so
/// unit tests can exercise verification failures without real hashing cost.
pub struct MarkerPasswordHasher;

#[async_trait]
impl PasswordHasher for MarkerPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::InvalidCredentials)
        }
    }
}

pub struct DummyTokenService;

#[async_trait]
impl TokenService for DummyTokenService {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = Utc::now();
        Ok(AuthTokenDto {
            token: format!("test-token-{}", i64::from(subject.account_id)),
            issued_at: now,
            expires_at: now + chrono::Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedAccount> {
        let account_id = token
            .strip_prefix("test-token-")
            .and_then(|id| id.parse::<i64>().ok())
            .ok_or_else(|| ApplicationError::invalid_token("invalid token"))?;

        let now = Utc::now();
        Ok(AuthenticatedAccount {
            id: AccountId::new(account_id)
                .map_err(|err| ApplicationError::invalid_token(err.to_string()))?,
            email: "tester@x.com".into(),
            role: Role::User,
            capabilities: Role::User.default_capabilities(),
            issued_at: now,
            expires_at: now + chrono::Duration::hours(1),
        })
    }
}

pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        Utc::now()
    }
}
