// src/application/error.rs
use crate::domain::errors::DomainError;
use crate::domain::message::{Message, MessageKey};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {message}")]
    Validation {
        field: Option<&'static str>,
        message: Message,
    },

    #[error("resource not found: {0}")]
    NotFound(Message),

    #[error("conflict: {0}")]
    Conflict(Message),

    #[error("unauthorized: {0}")]
    Unauthorized(Message),

    #[error("forbidden: {0}")]
    Forbidden(Message),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<Message>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    pub fn field(field: &'static str, message: impl Into<Message>) -> Self {
        Self::Validation {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<Message>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<Message>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<Message>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_authenticated() -> Self {
        Self::Unauthorized(MessageKey::NotAuthenticated.into())
    }

    pub fn forbidden(message: impl Into<Message>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn permission_denied() -> Self {
        Self::Forbidden(MessageKey::PermissionDenied.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// The message key surfaced to clients, if the error carries one.
    pub fn message_key(&self) -> Option<MessageKey> {
        match self {
            Self::Domain(DomainError::Validation { message, .. })
            | Self::Domain(
                DomainError::Conflict(message)
                | DomainError::Protected(message)
                | DomainError::NotFound(message),
            )
            | Self::Validation { message, .. }
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message) => Some(message.key()),
            Self::Domain(DomainError::Persistence(_)) | Self::Infrastructure(_) => None,
        }
    }
}
