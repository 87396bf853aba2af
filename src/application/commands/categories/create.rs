use super::{CategoryCommandService, policy};
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{
            CategoryArabicName, CategoryName, CategorySlug, NewCategory,
            entity::{normalize_features, validate_description, validate_icon, validate_order},
        },
        errors::{DomainError, DomainResult},
        message::MessageKey,
    },
};

pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub features: Vec<String>,
    pub order: i32,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let actor = policy::CREATE.require(actor)?;

        let name = CategoryName::new(required("name", command.name)?)?;
        let name_ar = CategoryArabicName::new(required("name_ar", command.name_ar)?)?;
        let slug = CategorySlug::new(self.slugger.slugify(name.as_str()))?;

        let new_category = NewCategory {
            user_id: actor.id,
            name,
            name_ar,
            slug,
            icon: validate_icon(command.icon)?,
            description: validate_description("description", command.description)?,
            description_ar: validate_description("description_ar", command.description_ar)?,
            features: normalize_features(command.features),
            order: validate_order(command.order)?,
            created_at: self.clock.now(),
        };

        let category = self
            .category_repo
            .insert(new_category)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => {
                    ApplicationError::field("name", MessageKey::CategoryAlreadyExists)
                }
                other => other.into(),
            })?;
        tracing::info!(
            category_id = %category.id,
            user_id = %actor.id,
            slug = %category.slug,
            "category created"
        );

        Ok(category.into())
    }
}

fn required(field: &'static str, value: Option<String>) -> DomainResult<String> {
    value.ok_or_else(|| DomainError::required(field))
}
