use std::sync::Arc;

use crate::domain::{post::PostRepository, user::UserRepository};

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl PostQueryService {
    pub fn new(post_repo: Arc<dyn PostRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }
}
