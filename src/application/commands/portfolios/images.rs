use super::{PortfolioCommandService, policy};
use crate::{
    application::{
        commands::uploads::{discard, store_image},
        dto::{AuthenticatedUser, PortfolioImageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::{DomainError, optional_text},
        media::UploadedFile,
        message::MessageKey,
        portfolio::{
            NewPortfolioImage, PortfolioId, PortfolioImageId, value_objects::CAPTION_MAX,
        },
    },
};

pub struct AddPortfolioImageCommand {
    pub portfolio_id: i64,
    pub image: Option<UploadedFile>,
    pub caption: Option<String>,
}

pub struct DeletePortfolioImageCommand {
    pub portfolio_id: i64,
    pub image_id: i64,
}

impl PortfolioCommandService {
    pub async fn add_image(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: AddPortfolioImageCommand,
    ) -> ApplicationResult<PortfolioImageDto> {
        policy::MANAGE.authorize_request(actor)?;
        let portfolio_id = PortfolioId::new(command.portfolio_id)?;
        self.load(portfolio_id).await?;

        let upload = command
            .image
            .ok_or_else(|| DomainError::required("image"))?
            .into_image("image")?;
        let caption = optional_text("caption", command.caption, CAPTION_MAX)?;

        let now = self.clock.now();
        let prefix = format!("portfolio_images/{portfolio_id}");
        let stored = store_image(self.storage.as_ref(), &prefix, &upload, now).await?;

        let new_image = NewPortfolioImage {
            portfolio_id,
            image: stored.clone(),
            caption,
            created_at: now,
        };
        let image = match self.image_repo.insert(new_image).await {
            Ok(image) => image,
            Err(err) => {
                discard(self.storage.as_ref(), &stored.name).await;
                return Err(err.into());
            }
        };
        tracing::info!(
            portfolio_id = %portfolio_id,
            image_id = i64::from(image.id),
            bytes = upload.len(),
            "portfolio image added"
        );

        Ok(image.into())
    }

    pub async fn delete_image(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePortfolioImageCommand,
    ) -> ApplicationResult<()> {
        policy::MANAGE.authorize_request(actor)?;
        let portfolio_id = PortfolioId::new(command.portfolio_id)?;
        let image_id = PortfolioImageId::new(command.image_id)?;
        let image = self
            .image_repo
            .find(portfolio_id, image_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::PortfolioImageNotFound))?;

        self.image_repo.delete(portfolio_id, image_id).await?;
        discard(self.storage.as_ref(), &image.image.name).await;
        tracing::info!(portfolio_id = %portfolio_id, image_id = command.image_id, "portfolio image deleted");
        Ok(())
    }
}
