use super::{UserCommandService, password::validate_password, policy};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        message::MessageKey,
        user::{PasswordHash, UserUpdate},
    },
};

pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let actor = policy::AUTHENTICATED.require(actor)?;
        if command.old_password.is_empty() {
            return Err(DomainError::blank("old_password").into());
        }
        if command.new_password.is_empty() {
            return Err(DomainError::blank("new_password").into());
        }

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::UserNotFound))?;

        match self
            .password_hasher
            .verify(&command.old_password, user.password_hash.as_str())
            .await
        {
            Ok(()) => {}
            Err(ApplicationError::Unauthorized(_)) => {
                return Err(ApplicationError::field(
                    "old_password",
                    MessageKey::OldPasswordIncorrect,
                ));
            }
            Err(other) => return Err(other),
        }

        validate_password(
            &command.new_password,
            &[
                user.username.as_str(),
                user.first_name.as_str(),
                user.last_name.as_str(),
                user.email.as_str(),
            ],
        )?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let update = UserUpdate::new(user.id).with_password_hash(PasswordHash::new(hashed)?);
        self.user_repo.update(update).await?;
        tracing::info!(user_id = %user.id, "password changed");

        Ok(())
    }
}
