use super::UserCommandService;
use crate::{
    application::{
        dto::{RefreshResponseDto, TokenType},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, message::MessageKey},
};

pub struct RefreshTokenCommand {
    pub refresh: String,
}

pub struct VerifyTokenCommand {
    pub token: String,
}

impl UserCommandService {
    /// Exchanges a refresh token for a new access token. The refresh token is
    /// not rotated and may be presented again until it expires.
    pub async fn refresh_token(
        &self,
        command: RefreshTokenCommand,
    ) -> ApplicationResult<RefreshResponseDto> {
        if command.refresh.trim().is_empty() {
            return Err(DomainError::blank("refresh").into());
        }

        let verified = self
            .token_service
            .verify(&command.refresh, TokenType::Refresh)
            .await
            .map_err(invalid_refresh)?;

        let user = self.user_repo.find_by_id(verified.user_id).await?;
        if !user.is_some_and(|u| u.is_active) {
            return Err(ApplicationError::unauthorized(
                MessageKey::InvalidRefreshToken,
            ));
        }

        let access = self
            .token_service
            .refresh(&command.refresh)
            .await
            .map_err(invalid_refresh)?;
        tracing::info!(user_id = %verified.user_id, jti = %verified.jti, "access token refreshed");

        Ok(RefreshResponseDto {
            access: access.token,
            access_expires_at: access.expires_at,
        })
    }

    /// Succeeds for any unexpired token with a valid signature, access or
    /// refresh.
    pub async fn verify_token(&self, command: VerifyTokenCommand) -> ApplicationResult<()> {
        if command.token.trim().is_empty() {
            return Err(DomainError::blank("token").into());
        }
        match self
            .token_service
            .verify(&command.token, TokenType::Access)
            .await
        {
            Ok(_) => Ok(()),
            Err(ApplicationError::Unauthorized(message))
                if message.key() == MessageKey::TokenWrongType =>
            {
                self.token_service
                    .verify(&command.token, TokenType::Refresh)
                    .await
                    .map(|_| ())
            }
            Err(err) => Err(err),
        }
    }
}

fn invalid_refresh(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::Unauthorized(_) => {
            ApplicationError::unauthorized(MessageKey::InvalidRefreshToken)
        }
        other => other,
    }
}
