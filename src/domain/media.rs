// src/domain/media.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::{Message, MessageKey};
use bytes::Bytes;

/// Largest accepted image payload: 5 MiB. Exactly this size is allowed.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A blob that has been written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub name: String,
    pub url: String,
}

impl StoredObject {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A file part as received from a multipart form, not yet validated.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn into_image(self, field: &'static str) -> DomainResult<ImageUpload> {
        ImageUpload::new(field, self.file_name, self.content_type, self.data)
    }
}

/// An image received from a client, validated before anything is written.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    file_name: Option<String>,
    content_type: String,
    data: Bytes,
}

impl ImageUpload {
    /// Validates size first, then content type. `field` names the form field
    /// the error is reported on.
    pub fn new(
        field: &'static str,
        file_name: Option<String>,
        content_type: Option<String>,
        data: Bytes,
    ) -> DomainResult<Self> {
        if data.len() > MAX_IMAGE_BYTES {
            #[allow(clippy::cast_precision_loss)]
            let size_mb = data.len() as f64 / (1024.0 * 1024.0);
            return Err(DomainError::invalid(
                field,
                Message::new(MessageKey::ImageTooLarge).with_arg(format!("{size_mb:.2}")),
            ));
        }
        if data.is_empty() {
            return Err(DomainError::invalid(field, MessageKey::ImageInvalid));
        }
        let content_type = content_type
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| c.starts_with("image/"))
            .ok_or_else(|| DomainError::invalid(field, MessageKey::ImageInvalid))?;
        Ok(Self {
            file_name,
            content_type,
            data,
        })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// File extension derived from the content type, falling back to the
    /// client file name.
    pub fn extension(&self) -> String {
        let from_type = match self.content_type.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/gif" => Some("gif"),
            "image/webp" => Some("webp"),
            "image/svg+xml" => Some("svg"),
            "image/avif" => Some("avif"),
            _ => None,
        };
        if let Some(ext) = from_type {
            return ext.to_string();
        }
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "img".to_string())
    }
}
