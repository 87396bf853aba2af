// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AccessToken, TokenPair, TokenType, VerifiedToken},
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Stateless signed session tokens. Nothing is stored: a token is valid while
/// its signature verifies and it has not expired.
#[async_trait]
pub trait TokenService: Send + Sync {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<TokenPair>;

    /// Fails with 401 on a bad signature, malformed payload, wrong type or
    /// expiry.
    async fn verify(&self, token: &str, expected: TokenType) -> ApplicationResult<VerifiedToken>;

    /// Mints a new access token from a refresh token. The refresh token stays
    /// usable until it expires.
    async fn refresh(&self, refresh_token: &str) -> ApplicationResult<AccessToken>;
}
