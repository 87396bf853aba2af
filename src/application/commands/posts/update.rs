use super::{
    PostCommandService, policy,
    service::{parse_category, parse_subtitle},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{
        PostUpdate,
        entity::{validate_body, validate_title},
    },
};

/// Partial update; `Some(None)` clears an optional field.
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub body: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        policy::OWNER.authorize_request(actor)?;
        let post = self.load(command.id).await?;
        policy::OWNER.authorize_object(actor, &post)?;

        let mut update = PostUpdate::new(post.id, self.clock.now());
        update.title = command.title.map(validate_title).transpose()?;
        update.body = command.body.map(validate_body).transpose()?;
        update.subtitle = command.subtitle.map(parse_subtitle).transpose()?;
        update.category = command.category.map(parse_category).transpose()?;

        let updated = self.post_repo.update(update).await?;
        tracing::info!(post_id = i64::from(updated.id), "post updated");
        self.to_dto(updated).await
    }
}
