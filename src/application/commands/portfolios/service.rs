use std::sync::Arc;

use crate::{
    application::{
        dto::PortfolioDto,
        error::{ApplicationError, ApplicationResult},
        ports::{storage::BlobStorage, time::Clock},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        message::{Message, MessageKey},
        portfolio::{Portfolio, PortfolioId, PortfolioImageRepository, PortfolioRepository},
        user::UserRepository,
    },
};

pub struct PortfolioCommandService {
    pub(super) portfolio_repo: Arc<dyn PortfolioRepository>,
    pub(super) image_repo: Arc<dyn PortfolioImageRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) storage: Arc<dyn BlobStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PortfolioCommandService {
    pub fn new(
        portfolio_repo: Arc<dyn PortfolioRepository>,
        image_repo: Arc<dyn PortfolioImageRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        storage: Arc<dyn BlobStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            portfolio_repo,
            image_repo,
            category_repo,
            user_repo,
            storage,
            clock,
        }
    }

    pub(super) async fn load(&self, id: PortfolioId) -> ApplicationResult<Portfolio> {
        self.portfolio_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PortfolioNotFound))
    }

    /// Resolves a client supplied category id, rejecting ids that do not
    /// exist.
    pub(super) async fn resolve_category(&self, raw: i64) -> ApplicationResult<CategoryId> {
        let invalid = || {
            ApplicationError::field(
                "category",
                Message::new(MessageKey::PortfolioCategoryMissing).with_arg(raw),
            )
        };
        let id = CategoryId::new(raw).map_err(|_| invalid())?;
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(invalid()),
        }
    }

    pub(super) async fn to_dto(&self, portfolio: Portfolio) -> ApplicationResult<PortfolioDto> {
        let author = self.user_repo.find_by_id(portfolio.author_id).await?;
        Ok(PortfolioDto::from_parts(portfolio, author.as_ref()))
    }
}
