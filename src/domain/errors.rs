// src/domain/errors.rs
use crate::domain::message::{Message, MessageKey};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {message}")]
    Validation {
        field: Option<&'static str>,
        message: Message,
    },
    #[error("conflict: {0}")]
    Conflict(Message),
    /// A delete was refused because other rows still reference the target.
    #[error("protected: {0}")]
    Protected(Message),
    #[error("not found: {0}")]
    NotFound(Message),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn invalid(field: &'static str, message: impl Into<Message>) -> Self {
        Self::Validation {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::invalid(field, MessageKey::FieldRequired)
    }

    pub fn blank(field: &'static str) -> Self {
        Self::invalid(field, MessageKey::FieldBlank)
    }

    pub fn too_long(field: &'static str, max: usize) -> Self {
        Self::invalid(field, Message::new(MessageKey::FieldTooLong).with_arg(max))
    }

    pub fn not_found(key: MessageKey) -> Self {
        Self::NotFound(key.into())
    }
}

/// Shared length/blank check for the bounded text fields of every entity.
pub(crate) fn bounded_text(
    field: &'static str,
    value: impl Into<String>,
    max_chars: usize,
    allow_blank: bool,
) -> DomainResult<String> {
    let value = value.into();
    if !allow_blank && value.trim().is_empty() {
        return Err(DomainError::blank(field));
    }
    if value.chars().count() > max_chars {
        return Err(DomainError::too_long(field, max_chars));
    }
    Ok(value)
}

/// Like [`bounded_text`] but maps empty strings to `None`.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
    max_chars: usize,
) -> DomainResult<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => bounded_text(field, v, max_chars, true).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_text_rejects_blank_unless_allowed() {
        assert!(matches!(
            bounded_text("title", "   ", 10, false),
            Err(DomainError::Validation { field: Some("title"), .. })
        ));
        assert_eq!(bounded_text("title", "", 10, true).unwrap(), "");
    }

    #[test]
    fn bounded_text_counts_chars_not_bytes() {
        // five Arabic letters, ten bytes
        assert!(bounded_text("name_ar", "تصميم", 5, false).is_ok());
        assert!(bounded_text("name_ar", "تصميمي", 5, false).is_err());
    }

    #[test]
    fn optional_text_treats_empty_as_none() {
        assert_eq!(optional_text("subtitle", Some(" ".into()), 5).unwrap(), None);
        assert_eq!(
            optional_text("subtitle", Some("ok".into()), 5).unwrap(),
            Some("ok".into())
        );
    }
}
