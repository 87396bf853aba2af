use super::PostQueryService;
use crate::{
    application::{
        commands::posts::policy,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{message::MessageKey, post::PostId},
};

impl PostQueryService {
    /// The caller's own posts, newest first.
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<PostDto>> {
        let actor = policy::AUTHOR.require(actor)?;
        let author = self.user_repo.find_by_id(actor.id).await?;
        let posts = self.post_repo.list_by_author(actor.id).await?;
        Ok(posts
            .into_iter()
            .map(|post| PostDto::from_parts(post, author.as_ref()))
            .collect())
    }

    pub async fn get_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<PostDto> {
        policy::OWNER.authorize_request(actor)?;
        let post = self
            .post_repo
            .find_by_id(PostId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PostNotFound))?;
        policy::OWNER.authorize_object(actor, &post)?;
        let author = self.user_repo.find_by_id(post.author_id).await?;
        Ok(PostDto::from_parts(post, author.as_ref()))
    }
}
