use super::PortfolioQueryService;
use crate::{
    application::{
        commands::portfolios::policy,
        dto::{AuthenticatedUser, PortfolioDto, PortfolioImageDto, PortfolioInfoDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        message::MessageKey,
        portfolio::{PortfolioId, PortfolioImageId},
    },
};

impl PortfolioQueryService {
    pub async fn get_portfolio(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<PortfolioDto> {
        policy::READ.authorize_request(actor)?;
        let id = PortfolioId::new(id)?;
        let portfolio = self
            .portfolio_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PortfolioNotFound))?;
        let author = self.user_repo.find_by_id(portfolio.author_id).await?;
        Ok(PortfolioDto::from_parts(portfolio, author.as_ref()))
    }

    pub async fn list_images(
        &self,
        actor: Option<&AuthenticatedUser>,
        portfolio_id: i64,
    ) -> ApplicationResult<Vec<PortfolioImageDto>> {
        policy::READ.authorize_request(actor)?;
        let portfolio_id = PortfolioId::new(portfolio_id)?;
        if self.portfolio_repo.find_by_id(portfolio_id).await?.is_none() {
            return Err(ApplicationError::not_found(MessageKey::PortfolioNotFound));
        }
        let images = self.image_repo.list_for_portfolio(portfolio_id).await?;
        Ok(images.into_iter().map(Into::into).collect())
    }

    pub async fn get_image(
        &self,
        actor: Option<&AuthenticatedUser>,
        portfolio_id: i64,
        image_id: i64,
    ) -> ApplicationResult<PortfolioImageDto> {
        policy::READ.authorize_request(actor)?;
        let portfolio_id = PortfolioId::new(portfolio_id)?;
        let image_id = PortfolioImageId::new(image_id)?;
        self.image_repo
            .find(portfolio_id, image_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PortfolioImageNotFound))
    }

    /// Public site metadata: the first record, joined with its owner.
    pub async fn get_info(&self) -> ApplicationResult<PortfolioInfoDto> {
        let info = self
            .info_repo
            .first()
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PortfolioInfoNotFound))?;
        let owner = match info.user_id {
            Some(user_id) => self.user_repo.find_by_id(user_id).await?,
            None => None,
        };
        Ok(PortfolioInfoDto::from_parts(info, owner.as_ref()))
    }
}
