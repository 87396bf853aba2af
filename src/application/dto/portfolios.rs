use crate::domain::{
    portfolio::{Portfolio, PortfolioImage, PortfolioInfo},
    user::User,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{serde_time, users::UserDto};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioDto {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub category: Option<i64>,
    pub body: String,
    pub completed: bool,
    pub author: Option<UserDto>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl PortfolioDto {
    pub fn from_parts(portfolio: Portfolio, author: Option<&User>) -> Self {
        Self {
            id: portfolio.id.into(),
            title: portfolio.title.into(),
            subtitle: portfolio.subtitle,
            image: portfolio.image.map(|image| image.url),
            category: portfolio.category_id.map(i64::from),
            body: portfolio.body.into(),
            completed: portfolio.completed,
            author: author.map(UserDto::from),
            created_at: portfolio.created_at,
            updated_at: portfolio.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioImageDto {
    pub id: i64,
    pub portfolio: i64,
    pub image: String,
    pub object_name: String,
    pub caption: Option<String>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<PortfolioImage> for PortfolioImageDto {
    fn from(image: PortfolioImage) -> Self {
        Self {
            id: image.id.into(),
            portfolio: image.portfolio_id.into(),
            image: image.image.url,
            object_name: image.image.name,
            caption: image.caption,
            created_at: image.created_at,
        }
    }
}

/// Public site metadata joined with the owner's contact details.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioInfoDto {
    pub id: i64,
    pub portfolio_title: String,
    pub portfolio_title_ar: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub about_me_ar: Option<String>,
    pub background_image: Option<String>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl PortfolioInfoDto {
    pub fn from_parts(info: PortfolioInfo, owner: Option<&User>) -> Self {
        Self {
            id: info.id,
            portfolio_title: info.portfolio_title,
            portfolio_title_ar: info.portfolio_title_ar,
            full_name: owner.map(User::full_name),
            email: owner.map(|u| u.email.as_str().to_string()),
            job_title: owner.and_then(|u| u.job_title.clone()),
            phone_number: owner.and_then(|u| u.phone_number.clone()),
            location: owner.and_then(|u| u.location.clone()),
            about_me: owner.and_then(|u| u.about_me.clone()),
            about_me_ar: owner.and_then(|u| u.about_me_ar.clone()),
            background_image: info.background_image.map(|image| image.url),
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}
