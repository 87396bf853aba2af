// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AccessToken, TokenPair, TokenType, VerifiedToken},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenService, time::Clock},
};
use crate::domain::{message::MessageKey, user::UserId};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload carried by both halves of a token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    user_id: i64,
    token_type: TokenType,
    iat: i64,
    exp: i64,
    jti: String,
}

/// HS256 token pair issuer. Expiry is checked against the injected clock
/// rather than the wall clock so that time can be controlled in tests.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    pub fn new(
        secret: &[u8],
        access_ttl: std::time::Duration,
        refresh_ttl: std::time::Duration,
        clock: Arc<dyn Clock>,
    ) -> ApplicationResult<Self> {
        let access_ttl = Duration::from_std(access_ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let refresh_ttl = Duration::from_std(refresh_ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            access_ttl,
            refresh_ttl,
            clock,
        })
    }

    fn mint(
        &self,
        user_id: UserId,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
    ) -> ApplicationResult<(String, DateTime<Utc>)> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let claims = Claims {
            user_id: user_id.0,
            token_type,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: uuid::Uuid::new_v4().simple().to_string(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok((token, expires_at))
    }

    fn decode_claims(&self, token: &str) -> ApplicationResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!(error = %err, "token rejected");
                match err.kind() {
                    ErrorKind::ExpiredSignature => {
                        ApplicationError::unauthorized(MessageKey::TokenExpired)
                    }
                    _ => ApplicationError::unauthorized(MessageKey::TokenInvalid),
                }
            })
    }
}

fn timestamp(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthorized(MessageKey::TokenInvalid))
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<TokenPair> {
        let now = self.clock.now();
        let (access, access_expires_at) = self.mint(user_id, TokenType::Access, now)?;
        let (refresh, refresh_expires_at) = self.mint(user_id, TokenType::Refresh, now)?;
        Ok(TokenPair {
            access,
            refresh,
            access_expires_at,
            refresh_expires_at,
        })
    }

    async fn verify(&self, token: &str, expected: TokenType) -> ApplicationResult<VerifiedToken> {
        let claims = self.decode_claims(token)?;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(ApplicationError::unauthorized(MessageKey::TokenExpired));
        }
        if claims.token_type != expected {
            return Err(ApplicationError::unauthorized(MessageKey::TokenWrongType));
        }
        let user_id = UserId::new(claims.user_id)
            .map_err(|_| ApplicationError::unauthorized(MessageKey::TokenInvalid))?;

        Ok(VerifiedToken {
            user_id,
            token_type: claims.token_type,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
            jti: claims.jti,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> ApplicationResult<AccessToken> {
        let verified = self.verify(refresh_token, TokenType::Refresh).await?;
        let (token, expires_at) =
            self.mint(verified.user_id, TokenType::Access, self.clock.now())?;
        Ok(AccessToken { token, expires_at })
    }
}
