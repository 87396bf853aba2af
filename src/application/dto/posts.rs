use crate::domain::{post::Post, user::User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{serde_time, users::UserDto};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub body: String,
    pub author: Option<UserDto>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_parts(post: Post, author: Option<&User>) -> Self {
        Self {
            id: post.id.into(),
            title: post.title,
            subtitle: post.subtitle,
            category: post.category.map(|c| c.as_str().to_string()),
            body: post.body,
            author: author.map(UserDto::from),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
