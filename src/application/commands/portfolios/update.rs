use super::{PortfolioCommandService, create::IMAGE_PREFIX, policy};
use crate::{
    application::{
        commands::uploads::{discard, store_image},
        dto::{AuthenticatedUser, PortfolioDto},
        error::ApplicationResult,
    },
    domain::{
        errors::optional_text,
        media::UploadedFile,
        portfolio::{
            PortfolioBody, PortfolioId, PortfolioTitle, PortfolioUpdate,
            value_objects::SUBTITLE_MAX,
        },
    },
};

#[derive(Debug, Default)]
pub enum ImageChange {
    #[default]
    Keep,
    Clear,
    Replace(UploadedFile),
}

/// Partial update; `Some(None)` clears an optional field.
pub struct UpdatePortfolioCommand {
    pub id: i64,
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub body: Option<String>,
    pub category_id: Option<Option<i64>>,
    pub completed: Option<bool>,
    pub image: ImageChange,
}

impl PortfolioCommandService {
    pub async fn update_portfolio(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdatePortfolioCommand,
    ) -> ApplicationResult<PortfolioDto> {
        policy::MANAGE.authorize_request(actor)?;
        let id = PortfolioId::new(command.id)?;
        let existing = self.load(id).await?;

        let now = self.clock.now();
        let mut update = PortfolioUpdate::new(id, now);
        update.title = command.title.map(PortfolioTitle::new).transpose()?;
        update.body = command.body.map(PortfolioBody::new).transpose()?;
        update.subtitle = command
            .subtitle
            .map(|s| optional_text("subtitle", s, SUBTITLE_MAX))
            .transpose()?;
        update.completed = command.completed;
        let upload = match command.image {
            ImageChange::Keep => None,
            ImageChange::Clear => {
                update.image = Some(None);
                None
            }
            ImageChange::Replace(file) => Some(file.into_image("image")?),
        };
        update.category_id = match command.category_id {
            Some(Some(raw)) => Some(Some(self.resolve_category(raw).await?)),
            Some(None) => Some(None),
            None => None,
        };

        let stored = match &upload {
            Some(upload) => {
                let object = store_image(self.storage.as_ref(), IMAGE_PREFIX, upload, now).await?;
                update.image = Some(Some(object.clone()));
                Some(object)
            }
            None => None,
        };

        let updated = match self.portfolio_repo.update(update).await {
            Ok(portfolio) => portfolio,
            Err(err) => {
                if let Some(object) = &stored {
                    discard(self.storage.as_ref(), &object.name).await;
                }
                return Err(err.into());
            }
        };

        if let Some(previous) = &existing.image {
            let still_used = updated
                .image
                .as_ref()
                .is_some_and(|current| current.name == previous.name);
            if !still_used {
                discard(self.storage.as_ref(), &previous.name).await;
            }
        }
        tracing::info!(portfolio_id = %updated.id, "portfolio updated");

        self.to_dto(updated).await
    }
}
