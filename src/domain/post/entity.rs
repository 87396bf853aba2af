// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult, bounded_text};
use crate::domain::message::{Message, MessageKey};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("post_id", MessageKey::InvalidId))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostCategory {
    Photography,
    Video,
    Branding,
    Design,
}

impl PostCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photography => "photography",
            Self::Video => "video",
            Self::Branding => "branding",
            Self::Design => "design",
        }
    }
}

impl FromStr for PostCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photography" => Ok(Self::Photography),
            "video" => Ok(Self::Video),
            "branding" => Ok(Self::Branding),
            "design" => Ok(Self::Design),
            other => Err(DomainError::invalid(
                "category",
                Message::new(MessageKey::PostCategoryInvalid).with_arg(other),
            )),
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const TITLE_MAX: usize = 200;
pub const SUBTITLE_MAX: usize = 300;

pub fn validate_title(value: impl Into<String>) -> DomainResult<String> {
    bounded_text("title", value, TITLE_MAX, false)
}

pub fn validate_body(value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(DomainError::blank("body"));
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<PostCategory>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<PostCategory>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub category: Option<Option<PostCategory>>,
    pub body: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            category: None,
            body: None,
            updated_at,
        }
    }

    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title.clone_from(title);
        }
        if let Some(subtitle) = &self.subtitle {
            post.subtitle.clone_from(subtitle);
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(body) = &self.body {
            post.body.clone_from(body);
        }
        post.updated_at = self.updated_at;
    }
}
