// src/domain/category/entity.rs
use crate::domain::category::value_objects::{
    CategoryArabicName, CategoryId, CategoryName, CategorySlug,
};
use crate::domain::errors::{DomainError, DomainResult, optional_text};
use crate::domain::message::MessageKey;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

pub const ICON_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 2000;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub user_id: UserId,
    pub name: CategoryName,
    pub name_ar: CategoryArabicName,
    pub slug: CategorySlug,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub features: Vec<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub user_id: UserId,
    pub name: CategoryName,
    pub name_ar: CategoryArabicName,
    pub slug: CategorySlug,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub features: Vec<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

/// Partial update. There is deliberately no slug here: the slug is fixed at
/// creation.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub name_ar: Option<CategoryArabicName>,
    pub icon: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub description_ar: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            name_ar: None,
            icon: None,
            description: None,
            description_ar: None,
            features: None,
            order: None,
            updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.name_ar.is_none()
            && self.icon.is_none()
            && self.description.is_none()
            && self.description_ar.is_none()
            && self.features.is_none()
            && self.order.is_none()
    }

    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(name_ar) = &self.name_ar {
            category.name_ar = name_ar.clone();
        }
        if let Some(icon) = &self.icon {
            category.icon.clone_from(icon);
        }
        if let Some(description) = &self.description {
            category.description.clone_from(description);
        }
        if let Some(description_ar) = &self.description_ar {
            category.description_ar.clone_from(description_ar);
        }
        if let Some(features) = &self.features {
            category.features.clone_from(features);
        }
        if let Some(order) = self.order {
            category.order = order;
        }
        category.updated_at = self.updated_at;
    }
}

pub fn validate_icon(value: Option<String>) -> DomainResult<Option<String>> {
    optional_text("icon", value, ICON_MAX)
}

pub fn validate_description(
    field: &'static str,
    value: Option<String>,
) -> DomainResult<Option<String>> {
    optional_text(field, value, DESCRIPTION_MAX)
}

pub fn validate_order(value: i32) -> DomainResult<i32> {
    if value < 0 {
        return Err(DomainError::invalid("order", MessageKey::FieldNegative));
    }
    Ok(value)
}

/// Drops blank entries and trims the rest.
pub fn normalize_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId::new(1).unwrap(),
            user_id: UserId::new(1).unwrap(),
            name: CategoryName::new("Web Design").unwrap(),
            name_ar: CategoryArabicName::new("تصميم المواقع").unwrap(),
            slug: CategorySlug::new("web-design").unwrap(),
            icon: None,
            description: None,
            description_ar: None,
            features: vec![],
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn update_never_touches_slug() {
        let mut category = sample();
        let later = category.updated_at + chrono::Duration::seconds(5);
        let mut update = CategoryUpdate::new(category.id, later);
        update.name = Some(CategoryName::new("Branding").unwrap());
        update.order = Some(3);
        update.apply_to(&mut category);
        assert_eq!(category.name.as_str(), "Branding");
        assert_eq!(category.slug.as_str(), "web-design");
        assert_eq!(category.order, 3);
        assert_eq!(category.updated_at, later);
    }

    #[test]
    fn order_must_be_non_negative() {
        assert!(validate_order(0).is_ok());
        assert!(validate_order(-1).is_err());
    }

    #[test]
    fn features_are_trimmed() {
        let features = normalize_features(vec![" SEO ".into(), "  ".into(), "UX".into()]);
        assert_eq!(features, vec!["SEO".to_string(), "UX".to_string()]);
    }
}
