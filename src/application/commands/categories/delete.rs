use super::{CategoryCommandService, policy};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        errors::DomainError,
        message::{Message, MessageKey},
        portfolio::PortfolioFilter,
    },
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Refused with 400 while portfolios still reference the category; the
    /// error carries the number of referencing portfolios.
    pub async fn delete_category(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        policy::MODIFY.authorize_request(actor)?;
        let id = CategoryId::new(command.id)?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::CategoryNotFound))?;
        policy::MODIFY.authorize_object(actor, &category)?;

        match self.category_repo.delete(id).await {
            Ok(()) => {
                tracing::info!(category_id = %id, "category deleted");
                Ok(())
            }
            Err(DomainError::Protected(_)) => {
                let count = self
                    .portfolio_repo
                    .count(PortfolioFilter {
                        category_id: Some(id),
                    })
                    .await?;
                tracing::info!(category_id = %id, portfolios = count, "category delete refused");
                Err(DomainError::Protected(
                    Message::new(MessageKey::CategoryProtected).with_arg(count),
                )
                .into())
            }
            Err(other) => Err(other.into()),
        }
    }
}
