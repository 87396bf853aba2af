use crate::domain::{portfolio::PortfolioInfo, user::User};
use serde::Serialize;
use utoipa::ToSchema;

/// Public summary of a user, embedded as `author` and returned by `/auth/me/`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileDto {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub about_me_ar: Option<String>,
    pub portfolio_title: Option<String>,
    pub portfolio_title_ar: Option<String>,
    pub background_image: Option<String>,
}

impl ProfileDto {
    pub fn from_parts(user: &User, info: Option<&PortfolioInfo>) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            full_name: user.full_name(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.as_str().to_string(),
            job_title: user.job_title.clone(),
            phone_number: user.phone_number.clone(),
            location: user.location.clone(),
            about_me: user.about_me.clone(),
            about_me_ar: user.about_me_ar.clone(),
            portfolio_title: info.map(|i| i.portfolio_title.clone()),
            portfolio_title_ar: info.map(|i| i.portfolio_title_ar.clone()),
            background_image: info
                .and_then(|i| i.background_image.as_ref())
                .map(|image| image.url.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetailDto {
    pub detail: String,
}
