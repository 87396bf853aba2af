use super::UserCommandService;
use crate::{
    application::{
        dto::{LoginResponseDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        message::MessageKey,
        user::{User, Username},
    },
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResponseDto> {
        if command.username.trim().is_empty() {
            return Err(DomainError::blank("username").into());
        }
        if command.password.is_empty() {
            return Err(DomainError::blank("password").into());
        }

        let user = self
            .find_and_authenticate_user(&command.username, &command.password)
            .await?;

        let tokens = self.token_service.issue(user.id).await?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(LoginResponseDto {
            user: UserDto::from(&user),
            access: tokens.access,
            refresh: tokens.refresh,
            access_expires_at: tokens.access_expires_at,
            refresh_expires_at: tokens.refresh_expires_at,
        })
    }

    /// Every failure (unknown user, inactive account, wrong password) is
    /// reported the same way so the response does not reveal which one.
    async fn find_and_authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let Ok(username) = Username::new(username) else {
            return Err(invalid_credentials());
        };
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !user.is_active {
            tracing::info!(user_id = %user.id, "login attempt on inactive account");
            return Err(invalid_credentials());
        }

        match self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            Ok(()) => Ok(user),
            Err(ApplicationError::Unauthorized(_)) => {
                tracing::info!(user_id = %user.id, "login failed: wrong password");
                Err(invalid_credentials())
            }
            Err(other) => Err(other),
        }
    }
}

fn invalid_credentials() -> ApplicationError {
    ApplicationError::validation(MessageKey::InvalidCredentials)
}
