// src/domain/portfolio/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, bounded_text};
use crate::domain::message::MessageKey;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortfolioId(pub i64);

impl PortfolioId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("portfolio_id", MessageKey::InvalidId))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PortfolioId> for i64 {
    fn from(value: PortfolioId) -> Self {
        value.0
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortfolioImageId(pub i64);

impl PortfolioImageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("image_id", MessageKey::InvalidId))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PortfolioImageId> for i64 {
    fn from(value: PortfolioImageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioTitle(String);

impl PortfolioTitle {
    pub const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text("title", value, Self::MAX_LEN, false).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PortfolioTitle> for String {
    fn from(value: PortfolioTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioBody(String);

impl PortfolioBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::blank("body"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PortfolioBody> for String {
    fn from(value: PortfolioBody) -> Self {
        value.0
    }
}

pub const SUBTITLE_MAX: usize = 300;
pub const CAPTION_MAX: usize = 255;
pub const INFO_TITLE_MAX: usize = 200;
