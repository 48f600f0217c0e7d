// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedAccount, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produces a digest embedding a fresh random salt; hashing the same
    /// plaintext twice yields different digests, both of which verify.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Constant-time verification against the salt and parameters embedded in
    /// the digest. A malformed digest is a verification failure, never a
    /// panic or internal error.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenService: Send + Sync {
    /// Seals identity and role claims into a signed, time-bounded token.
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;

    /// Verifies signature then expiry, in that order. Claims are never
    /// trusted before the signature check.
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedAccount>;
}
