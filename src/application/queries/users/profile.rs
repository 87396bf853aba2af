use super::UserQueryService;
use crate::{
    application::{
        commands::users::policy,
        dto::{AuthenticatedUser, ProfileDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{message::MessageKey, user::User},
};

impl UserQueryService {
    pub async fn me(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<UserDto> {
        let user = self.current_user(actor).await?;
        Ok(user.into())
    }

    pub async fn get_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ProfileDto> {
        let user = self.current_user(actor).await?;
        let info = self.info_repo.find_by_user(user.id).await?;
        Ok(ProfileDto::from_parts(&user, info.as_ref()))
    }

    async fn current_user(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<User> {
        let actor = policy::AUTHENTICATED.require(actor)?;
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::UserNotFound))
    }
}
