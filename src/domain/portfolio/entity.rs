// src/domain/portfolio/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::media::StoredObject;
use crate::domain::portfolio::value_objects::{
    PortfolioBody, PortfolioId, PortfolioImageId, PortfolioTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub id: PortfolioId,
    pub author_id: UserId,
    pub title: PortfolioTitle,
    pub subtitle: Option<String>,
    pub image: Option<StoredObject>,
    pub category_id: Option<CategoryId>,
    pub body: PortfolioBody,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPortfolio {
    pub author_id: UserId,
    pub title: PortfolioTitle,
    pub subtitle: Option<String>,
    pub image: Option<StoredObject>,
    pub category_id: Option<CategoryId>,
    pub body: PortfolioBody,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PortfolioUpdate {
    pub id: PortfolioId,
    pub title: Option<PortfolioTitle>,
    pub subtitle: Option<Option<String>>,
    pub image: Option<Option<StoredObject>>,
    pub category_id: Option<Option<CategoryId>>,
    pub body: Option<PortfolioBody>,
    pub completed: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioUpdate {
    pub fn new(id: PortfolioId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            image: None,
            category_id: None,
            body: None,
            completed: None,
            updated_at,
        }
    }

    pub fn apply_to(&self, portfolio: &mut Portfolio) {
        if let Some(title) = &self.title {
            portfolio.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            portfolio.subtitle.clone_from(subtitle);
        }
        if let Some(image) = &self.image {
            portfolio.image.clone_from(image);
        }
        if let Some(category_id) = self.category_id {
            portfolio.category_id = category_id;
        }
        if let Some(body) = &self.body {
            portfolio.body = body.clone();
        }
        if let Some(completed) = self.completed {
            portfolio.completed = completed;
        }
        portfolio.updated_at = self.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioImage {
    pub id: PortfolioImageId,
    pub portfolio_id: PortfolioId,
    pub image: StoredObject,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPortfolioImage {
    pub portfolio_id: PortfolioId,
    pub image: StoredObject,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public site metadata. At most one record is expected per deployment.
#[derive(Debug, Clone)]
pub struct PortfolioInfo {
    pub id: i64,
    pub user_id: Option<UserId>,
    pub portfolio_title: String,
    pub portfolio_title_ar: String,
    pub background_image: Option<StoredObject>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioInfo {
    pub const DEFAULT_TITLE: &'static str = "My Portfolio";
    pub const DEFAULT_TITLE_AR: &'static str = "منصة أعمالي";
}

/// Changes to the site metadata made through the profile endpoint. A record
/// with defaults is created for the user when none exists yet.
#[derive(Debug, Clone)]
pub struct PortfolioInfoChanges {
    pub portfolio_title: Option<String>,
    pub portfolio_title_ar: Option<String>,
    pub background_image: Option<StoredObject>,
    pub now: DateTime<Utc>,
}

impl PortfolioInfoChanges {
    pub fn is_empty(&self) -> bool {
        self.portfolio_title.is_none()
            && self.portfolio_title_ar.is_none()
            && self.background_image.is_none()
    }

    /// Builds the record inserted when the user has none yet.
    pub fn into_new(self, id: i64, user_id: UserId) -> PortfolioInfo {
        PortfolioInfo {
            id,
            user_id: Some(user_id),
            portfolio_title: self
                .portfolio_title
                .unwrap_or_else(|| PortfolioInfo::DEFAULT_TITLE.to_string()),
            portfolio_title_ar: self
                .portfolio_title_ar
                .unwrap_or_else(|| PortfolioInfo::DEFAULT_TITLE_AR.to_string()),
            background_image: self.background_image,
            created_at: self.now,
            updated_at: self.now,
        }
    }

    pub fn apply_to(&self, info: &mut PortfolioInfo) {
        if let Some(title) = &self.portfolio_title {
            info.portfolio_title.clone_from(title);
        }
        if let Some(title_ar) = &self.portfolio_title_ar {
            info.portfolio_title_ar.clone_from(title_ar);
        }
        if let Some(image) = &self.background_image {
            info.background_image = Some(image.clone());
        }
        info.updated_at = self.now;
    }
}
