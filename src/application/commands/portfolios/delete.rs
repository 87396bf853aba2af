use super::{PortfolioCommandService, policy};
use crate::{
    application::{commands::uploads::discard, dto::AuthenticatedUser, error::ApplicationResult},
    domain::portfolio::PortfolioId,
};

pub struct DeletePortfolioCommand {
    pub id: i64,
}

impl PortfolioCommandService {
    /// Deletes the portfolio and its images, then removes their blobs
    /// best-effort.
    pub async fn delete_portfolio(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePortfolioCommand,
    ) -> ApplicationResult<()> {
        policy::MANAGE.authorize_request(actor)?;
        let id = PortfolioId::new(command.id)?;
        let portfolio = self.load(id).await?;
        let images = self.image_repo.list_for_portfolio(id).await?;

        self.portfolio_repo.delete(id).await?;

        let objects = portfolio
            .image
            .iter()
            .chain(images.iter().map(|image| &image.image));
        for object in objects {
            discard(self.storage.as_ref(), &object.name).await;
        }
        tracing::info!(portfolio_id = %id, images = images.len(), "portfolio deleted");
        Ok(())
    }
}
