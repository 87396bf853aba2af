use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub user: i64,
    pub name: String,
    pub name_ar: String,
    pub slug: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub features: Vec<String>,
    pub order: i32,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            user: category.user_id.into(),
            name: category.name.into(),
            name_ar: category.name_ar.into(),
            slug: category.slug.into(),
            icon: category.icon,
            description: category.description,
            description_ar: category.description_ar,
            features: category.features,
            order: category.order,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
