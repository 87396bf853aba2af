use super::{PortfolioCommandService, policy};
use crate::{
    application::{
        commands::uploads::{discard, store_image},
        dto::{AuthenticatedUser, PortfolioDto},
        error::ApplicationResult,
    },
    domain::{
        errors::{DomainError, optional_text},
        media::UploadedFile,
        portfolio::{NewPortfolio, PortfolioBody, PortfolioTitle, value_objects::SUBTITLE_MAX},
    },
};

pub(super) const IMAGE_PREFIX: &str = "portfolios";

pub struct CreatePortfolioCommand {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<i64>,
    pub completed: bool,
    pub image: Option<UploadedFile>,
}

impl PortfolioCommandService {
    pub async fn create_portfolio(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePortfolioCommand,
    ) -> ApplicationResult<PortfolioDto> {
        let actor = policy::MANAGE.require(actor)?;

        let title = PortfolioTitle::new(
            command
                .title
                .ok_or_else(|| DomainError::required("title"))?,
        )?;
        let body =
            PortfolioBody::new(command.body.ok_or_else(|| DomainError::required("body"))?)?;
        let subtitle = optional_text("subtitle", command.subtitle, SUBTITLE_MAX)?;
        let image = command
            .image
            .map(|file| file.into_image("image"))
            .transpose()?;
        let category_id = match command.category_id {
            Some(raw) => Some(self.resolve_category(raw).await?),
            None => None,
        };

        let now = self.clock.now();
        let stored = match &image {
            Some(upload) => {
                Some(store_image(self.storage.as_ref(), IMAGE_PREFIX, upload, now).await?)
            }
            None => None,
        };

        let new_portfolio = NewPortfolio {
            author_id: actor.id,
            title,
            subtitle,
            image: stored.clone(),
            category_id,
            body,
            completed: command.completed,
            created_at: now,
        };

        let portfolio = match self.portfolio_repo.insert(new_portfolio).await {
            Ok(portfolio) => portfolio,
            Err(err) => {
                if let Some(object) = &stored {
                    discard(self.storage.as_ref(), &object.name).await;
                }
                return Err(err.into());
            }
        };
        tracing::info!(portfolio_id = %portfolio.id, user_id = %actor.id, "portfolio created");

        self.to_dto(portfolio).await
    }
}
