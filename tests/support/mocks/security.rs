// tests/support/mocks/security.rs
use async_trait::async_trait;
use folio_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};
use folio_core::domain::message::MessageKey;

/// Deterministic stand-in for argon2: the hash of `pw` is `hash::pw`.
#[derive(Clone, Copy, Default)]
pub struct StrictPasswordHasher;

impl StrictPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hash::{password}")
    }
}

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized(MessageKey::InvalidCredentials))
        }
    }
}
