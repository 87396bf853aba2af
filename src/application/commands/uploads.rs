// src/application/commands/uploads.rs
use crate::application::{error::ApplicationResult, ports::storage::{BlobStorage, object_name}};
use crate::domain::media::{ImageUpload, StoredObject};
use chrono::{DateTime, Utc};

pub(crate) async fn store_image(
    storage: &dyn BlobStorage,
    prefix: &str,
    upload: &ImageUpload,
    now: DateTime<Utc>,
) -> ApplicationResult<StoredObject> {
    let name = object_name(prefix, upload, now);
    let stored = storage.save(&name, upload).await?;
    tracing::debug!(object = %stored.name, bytes = upload.len(), "image stored");
    Ok(stored)
}

/// Removes a blob, logging instead of failing: the owning row is already gone
/// or replaced.
pub(crate) async fn discard(storage: &dyn BlobStorage, name: &str) {
    if let Err(err) = storage.delete(name).await {
        tracing::warn!(object = %name, error = %err, "failed to delete stored object");
    }
}
