use super::{
    PostCommandService, policy,
    service::{parse_category, parse_subtitle},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainError,
        post::{
            NewPost,
            entity::{validate_body, validate_title},
        },
    },
};

pub struct CreatePostCommand {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub body: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = policy::AUTHOR.require(actor)?;
        let title = validate_title(command.title.ok_or_else(|| DomainError::required("title"))?)?;
        let body = validate_body(command.body.ok_or_else(|| DomainError::required("body"))?)?;

        let new_post = NewPost {
            author_id: actor.id,
            title,
            subtitle: parse_subtitle(command.subtitle)?,
            category: parse_category(command.category)?,
            body,
            created_at: self.clock.now(),
        };
        let post = self.post_repo.insert(new_post).await?;
        tracing::info!(post_id = i64::from(post.id), user_id = %actor.id, "post created");

        self.to_dto(post).await
    }
}
