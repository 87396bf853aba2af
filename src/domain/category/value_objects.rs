// src/domain/category/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, bounded_text};
use crate::domain::message::MessageKey;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("category_id", MessageKey::InvalidId))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// English display name: ASCII letters and spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub const MAX_LEN: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = bounded_text("name", value, Self::MAX_LEN, false)?;
        if !value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(DomainError::invalid(
                "name",
                MessageKey::CategoryNameNotEnglish,
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

/// Arabic display name: characters from the Arabic blocks and spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryArabicName(String);

impl CategoryArabicName {
    pub const MAX_LEN: usize = 100;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = bounded_text("name_ar", value, Self::MAX_LEN, false)?;
        if !value.chars().all(|c| c == ' ' || is_arabic(c)) {
            return Err(DomainError::invalid(
                "name_ar",
                MessageKey::CategoryArabicNameNotArabic,
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CategoryArabicName> for String {
    fn from(value: CategoryArabicName) -> Self {
        value.0
    }
}

fn is_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// URL slug, computed from the English name when the category is created and
/// never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::blank("slug"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategorySlug> for String {
    fn from(value: CategorySlug) -> Self {
        value.0
    }
}
