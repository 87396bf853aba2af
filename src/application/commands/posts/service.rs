use std::sync::Arc;

use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        errors::optional_text,
        message::MessageKey,
        post::{Post, PostCategory, PostId, PostRepository, entity::SUBTITLE_MAX},
        user::UserRepository,
    },
};

pub struct PostCommandService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Post> {
        let id = PostId::new(id)?;
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PostNotFound))
    }

    pub(super) async fn to_dto(&self, post: Post) -> ApplicationResult<PostDto> {
        let author = self.user_repo.find_by_id(post.author_id).await?;
        Ok(PostDto::from_parts(post, author.as_ref()))
    }
}

pub(super) fn parse_subtitle(value: Option<String>) -> ApplicationResult<Option<String>> {
    Ok(optional_text("subtitle", value, SUBTITLE_MAX)?)
}

/// Empty string means "no category".
pub(super) fn parse_category(value: Option<String>) -> ApplicationResult<Option<PostCategory>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(raw.parse::<PostCategory>()?)),
    }
}
