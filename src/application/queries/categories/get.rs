use super::CategoryQueryService;
use crate::{
    application::{
        commands::categories::policy,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryId, message::MessageKey},
};

impl CategoryQueryService {
    /// Every category ordered by `(order, name)`.
    pub async fn list_categories(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        policy::READ.authorize_request(actor)?;
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<CategoryDto> {
        policy::READ.authorize_request(actor)?;
        let id = CategoryId::new(id)?;
        self.category_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(MessageKey::CategoryNotFound))
    }
}
