use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        message::MessageKey,
        user::{Email, NewUser, PasswordHash, Username},
    },
};

/// Creates a superuser account. Only reachable from the command line, never
/// over HTTP.
pub struct CreateSuperuserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn create_superuser(
        &self,
        command: CreateSuperuserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password, &[username.as_str(), email.as_str()]).map_err(
            |err| match err {
                ApplicationError::Validation { message, .. } => {
                    ApplicationError::field("password", message)
                }
                other => other,
            },
        )?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::field(
                "username",
                MessageKey::UsernameTaken,
            ));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user =
            NewUser::new(username, email, PasswordHash::new(hashed)?, self.clock.now()).superuser();
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "superuser created");

        Ok(user.into())
    }
}
