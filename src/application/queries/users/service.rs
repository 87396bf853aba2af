use std::sync::Arc;

use crate::domain::{portfolio::PortfolioInfoRepository, user::UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) info_repo: Arc<dyn PortfolioInfoRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        info_repo: Arc<dyn PortfolioInfoRepository>,
    ) -> Self {
        Self {
            user_repo,
            info_repo,
        }
    }
}
