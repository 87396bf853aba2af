use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{dto::PortfolioDto, error::ApplicationResult},
    domain::{
        portfolio::{
            Portfolio, PortfolioImageRepository, PortfolioInfoRepository, PortfolioRepository,
        },
        user::{UserId, UserRepository},
    },
};

/// Listing defaults taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ListingSettings {
    pub page_size: u64,
    pub recent_limit: u64,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            recent_limit: 6,
        }
    }
}

pub struct PortfolioQueryService {
    pub(super) portfolio_repo: Arc<dyn PortfolioRepository>,
    pub(super) image_repo: Arc<dyn PortfolioImageRepository>,
    pub(super) info_repo: Arc<dyn PortfolioInfoRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) settings: ListingSettings,
}

impl PortfolioQueryService {
    pub fn new(
        portfolio_repo: Arc<dyn PortfolioRepository>,
        image_repo: Arc<dyn PortfolioImageRepository>,
        info_repo: Arc<dyn PortfolioInfoRepository>,
        user_repo: Arc<dyn UserRepository>,
        settings: ListingSettings,
    ) -> Self {
        Self {
            portfolio_repo,
            image_repo,
            info_repo,
            user_repo,
            settings,
        }
    }

    /// Attaches author summaries with a single lookup.
    pub(super) async fn with_authors(
        &self,
        portfolios: Vec<Portfolio>,
    ) -> ApplicationResult<Vec<PortfolioDto>> {
        let mut ids: Vec<UserId> = portfolios.iter().map(|p| p.author_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let authors: HashMap<UserId, _> = self
            .user_repo
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();
        Ok(portfolios
            .into_iter()
            .map(|portfolio| {
                let author = authors.get(&portfolio.author_id);
                PortfolioDto::from_parts(portfolio, author)
            })
            .collect())
    }
}
