use super::{CategoryCommandService, policy};
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{
            CategoryArabicName, CategoryId, CategoryName, CategoryUpdate,
            entity::{normalize_features, validate_description, validate_icon, validate_order},
        },
        message::MessageKey,
    },
};

/// Partial update. `Some(None)` clears an optional field. The slug cannot be
/// changed, so there is no field for it.
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub icon: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub description_ar: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        policy::MODIFY.authorize_request(actor)?;
        let id = CategoryId::new(command.id)?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(MessageKey::CategoryNotFound))?;
        policy::MODIFY.authorize_object(actor, &category)?;

        let mut update = CategoryUpdate::new(id, self.clock.now());
        update.name = command.name.map(CategoryName::new).transpose()?;
        update.name_ar = command.name_ar.map(CategoryArabicName::new).transpose()?;
        update.icon = command.icon.map(validate_icon).transpose()?;
        update.description = command
            .description
            .map(|d| validate_description("description", d))
            .transpose()?;
        update.description_ar = command
            .description_ar
            .map(|d| validate_description("description_ar", d))
            .transpose()?;
        update.features = command.features.map(normalize_features);
        update.order = command.order.map(validate_order).transpose()?;

        if update.is_empty() {
            return Ok(category.into());
        }

        let updated = self.category_repo.update(update).await?;
        tracing::info!(category_id = %updated.id, "category updated");
        Ok(updated.into())
    }
}
