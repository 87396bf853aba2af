// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::media::{ImageUpload, StoredObject};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[async_trait]
pub trait BlobStorage: Send + Sync {
    async fn save(&self, name: &str, upload: &ImageUpload) -> ApplicationResult<StoredObject>;

    async fn delete(&self, name: &str) -> ApplicationResult<()>;
}

/// Object name for an upload: `{prefix}/{yyyy}/{mm}/{dd}/{digest}-{unique}.{ext}`
/// where the digest is the first 16 hex characters of the content's SHA-256.
/// Every upload gets its own object, even for identical bytes, so deleting one
/// row never removes a blob another row still points at.
pub fn object_name(prefix: &str, upload: &ImageUpload, now: DateTime<Utc>) -> String {
    let digest = Sha256::digest(upload.data());
    let hex: String = digest
        .iter()
        .take(8)
        .map(|b| format!("{b:02x}"))
        .collect();
    format!(
        "{}/{:04}/{:02}/{:02}/{}-{}.{}",
        prefix.trim_matches('/'),
        now.year(),
        now.month(),
        now.day(),
        hex,
        Uuid::new_v4().simple(),
        upload.extension()
    )
}
