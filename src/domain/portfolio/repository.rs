// src/domain/portfolio/repository.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::portfolio::entity::{
    NewPortfolio, NewPortfolioImage, Portfolio, PortfolioImage, PortfolioInfo, PortfolioUpdate,
};
use crate::domain::portfolio::value_objects::{PortfolioId, PortfolioImageId};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Filter applied to portfolio listings and counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioFilter {
    pub category_id: Option<CategoryId>,
}

/// Offset/limit window over the `created_at DESC` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn insert(&self, portfolio: NewPortfolio) -> DomainResult<Portfolio>;

    async fn update(&self, update: PortfolioUpdate) -> DomainResult<Portfolio>;

    /// Removes the portfolio and, by cascade, its images.
    async fn delete(&self, id: PortfolioId) -> DomainResult<()>;

    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<Portfolio>>;

    async fn count(&self, filter: PortfolioFilter) -> DomainResult<u64>;

    async fn list(&self, filter: PortfolioFilter, window: Window) -> DomainResult<Vec<Portfolio>>;
}

#[async_trait]
pub trait PortfolioImageRepository: Send + Sync {
    async fn insert(&self, image: NewPortfolioImage) -> DomainResult<PortfolioImage>;

    async fn delete(&self, portfolio_id: PortfolioId, id: PortfolioImageId) -> DomainResult<()>;

    async fn find(
        &self,
        portfolio_id: PortfolioId,
        id: PortfolioImageId,
    ) -> DomainResult<Option<PortfolioImage>>;

    /// Images of one portfolio, oldest first.
    async fn list_for_portfolio(
        &self,
        portfolio_id: PortfolioId,
    ) -> DomainResult<Vec<PortfolioImage>>;
}

#[async_trait]
pub trait PortfolioInfoRepository: Send + Sync {
    /// The first record by id, if any.
    async fn first(&self) -> DomainResult<Option<PortfolioInfo>>;

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<PortfolioInfo>>;
}
