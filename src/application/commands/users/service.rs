use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenService},
    storage::BlobStorage,
    time::Clock,
};
use crate::domain::{
    portfolio::PortfolioInfoRepository,
    user::{ProfileRepository, UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) info_repo: Arc<dyn PortfolioInfoRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_service: Arc<dyn TokenService>,
    pub(super) storage: Arc<dyn BlobStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        info_repo: Arc<dyn PortfolioInfoRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        storage: Arc<dyn BlobStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            info_repo,
            password_hasher,
            token_service,
            storage,
            clock,
        }
    }
}
