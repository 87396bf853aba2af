// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::domain::message::{Message, MessageKey};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// An error on its way out of a handler. The body is rendered in the
/// caller's language by the localization middleware, which picks up the
/// [`PendingError`] left in the response extensions.
#[derive(Debug, Clone)]
pub struct HttpError {
    status: StatusCode,
    message: Message,
    field: Option<&'static str>,
}

/// Response extension carrying the untranslated error.
#[derive(Debug, Clone)]
pub struct PendingError {
    pub status: StatusCode,
    pub message: Message,
    pub field: Option<&'static str>,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<Message>) -> Self {
        Self {
            status,
            message: message.into(),
            field: None,
        }
    }

    pub fn bad_request(message: impl Into<Message>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::bad_request(Message::new(MessageKey::MalformedRequest).with_arg(reason))
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, MessageKey::InternalError)
    }

    #[must_use]
    pub fn with_field(mut self, field: Option<&'static str>) -> Self {
        self.field = field;
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn message(&self) -> &Message {
        &self.message
    }

    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain) => Self::from_domain(domain),
            ApplicationError::Validation { field, message } => {
                Self::bad_request(message).with_field(field)
            }
            ApplicationError::Conflict(message) => Self::bad_request(message),
            ApplicationError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message),
            ApplicationError::Unauthorized(message) => {
                Self::new(StatusCode::UNAUTHORIZED, message)
            }
            ApplicationError::Forbidden(message) => Self::new(StatusCode::FORBIDDEN, message),
            ApplicationError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "infrastructure failure");
                Self::internal()
            }
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => {
                Self::bad_request(message).with_field(field)
            }
            DomainError::Conflict(message) | DomainError::Protected(message) => {
                Self::bad_request(message)
            }
            DomainError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message),
            DomainError::Persistence(detail) => {
                tracing::error!(error = %detail, "persistence failure");
                Self::internal()
            }
        }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from_domain(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            StatusCode::UNSUPPORTED_MEDIA_TYPE => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(
            status,
            Message::new(MessageKey::MalformedRequest).with_arg(rejection.body_text()),
        )
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        let status = match err.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(
            status,
            Message::new(MessageKey::MalformedRequest).with_arg(err.body_text()),
        )
    }
}

/// Error payload returned by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub message: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, pending: &PendingError, text: String) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("error").to_string(),
            code: pending.message.key().as_str().to_string(),
            message: text.clone(),
            detail: text,
            field: pending.field.map(str::to_string),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let pending = PendingError {
            status: self.status,
            message: self.message,
            field: self.field,
        };
        // Untranslated fallback; replaced by the localization middleware.
        let body = ErrorBody::new(
            self.status,
            &pending,
            pending.message.key().as_str().to_string(),
        );
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(pending);
        response
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
