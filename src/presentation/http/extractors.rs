// src/presentation/http/extractors.rs
use crate::{
    application::{
        authorization::Policy, dto::AuthenticatedUser, error::ApplicationError,
        ports::i18n::Locale,
    },
    domain::media::UploadedFile,
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{FromRequest, FromRequestParts, Multipart, Request},
    http::{HeaderMap, header, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }

    /// Request-level checks of `policy`. Handlers that take a body call this
    /// before the body is decoded, so a missing identity answers 401 even
    /// when the body is malformed.
    pub fn admit<T>(&self, policy: &Policy, body: Result<T, HttpError>) -> Result<T, HttpError> {
        policy
            .authorize_request(self.user())
            .map_err(HttpError::from_error)?;
        body
    }
}

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(app_state)| app_state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| HttpError::from_error(ApplicationError::not_authenticated()))?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

/// Resolves the caller when a bearer token is present. A token that is
/// present but invalid is still rejected with 401.
impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                let user = app_state
                    .services
                    .authenticate(header.token())
                    .await
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(user)))
            }
            None => Ok(Self(None)),
        }
    }
}

/// Locale negotiated from `Accept-Language`, falling back to the configured
/// default.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

pub fn negotiate_locale(headers: &HeaderMap, fallback: Locale) -> Locale {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map_or(fallback, |value| Locale::negotiate(value, fallback))
}

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let fallback = app_state(parts, state)
            .await
            .map_or(Locale::default(), |s| s.settings.default_locale);
        Ok(Self(negotiate_locale(&parts.headers, fallback)))
    }
}

/// `axum::Json` with rejections rendered as localized 400 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// A request body that may arrive either as JSON or as
/// `multipart/form-data`. Multipart text parts become JSON strings so both
/// shapes deserialize through the same request type; file parts are kept
/// aside.
#[derive(Debug, Default)]
pub struct Payload {
    fields: serde_json::Map<String, serde_json::Value>,
    files: HashMap<String, UploadedFile>,
}

impl Payload {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_value(serde_json::Value::Object(self.fields.clone()))
            .map_err(HttpError::malformed)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Whether the field was sent as `null` or an empty string, which clears
    /// a stored file.
    pub fn is_cleared(&self, name: &str) -> bool {
        match self.fields.get(name) {
            Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, HttpError> {
        let mut payload = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            if let Some(file_name) = file_name {
                let data = field.bytes().await?;
                // browsers send an empty part when no file was picked
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                payload.files.insert(
                    name,
                    UploadedFile {
                        file_name: Some(file_name),
                        content_type,
                        data,
                    },
                );
            } else {
                let text = field.text().await?;
                payload.fields.insert(name, serde_json::Value::String(text));
            }
        }
        Ok(payload)
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::malformed(rejection.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;
        match value {
            serde_json::Value::Object(fields) => Ok(Self {
                fields,
                files: HashMap::new(),
            }),
            _ => Err(HttpError::malformed("expected a JSON object")),
        }
    }
}

/// Lenient field decoders shared by the JSON and multipart request shapes.
pub mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};
    use serde_json::Value;

    /// Absent → `None`, `null` → `Some(None)`, value → `Some(Some(v))`.
    pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(de).map(Some)
    }

    pub fn truthy(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

    pub fn flag<'de, D>(de: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(de)? {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(b)),
            Value::String(s) => Ok(Some(truthy(&s))),
            Value::Number(n) => Ok(Some(n.as_i64().is_some_and(|n| n != 0))),
            other => Err(D::Error::custom(format!("expected a boolean, got {other}"))),
        }
    }

    fn id_from(value: Value) -> Result<Option<i64>, String> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| format!("expected an integer id, got {n}")),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| format!("expected an integer id, got \"{s}\"")),
            other => Err(format!("expected an integer id, got {other}")),
        }
    }

    /// Id that may be sent as a number or a numeric string; empty means none.
    pub fn id<'de, D>(de: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_from(Value::deserialize(de)?).map_err(D::Error::custom)
    }

    /// Like [`id`], but distinguishes "clear" (`null`/empty) from absent.
    pub fn nullable_id<'de, D>(de: D) -> Result<Option<Option<i64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_from(Value::deserialize(de)?)
            .map(Some)
            .map_err(D::Error::custom)
    }
}
