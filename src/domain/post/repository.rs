// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostId, PostUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    async fn delete(&self, id: PostId) -> DomainResult<()>;

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Posts written by one author, newest first.
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>>;
}
