// src/infrastructure/storage/local.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::storage::BlobStorage,
};
use crate::domain::media::{ImageUpload, StoredObject};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Stores uploads under a directory that is served read-only at `base_url`.
#[derive(Debug, Clone)]
pub struct LocalBlobStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalBlobStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(name);
        let safe = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !safe {
            return Err(ApplicationError::infrastructure(format!(
                "refusing to store object outside media root: {name}"
            )));
        }
        Ok(self.root.join(relative))
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

#[async_trait]
impl BlobStorage for LocalBlobStorage {
    async fn save(&self, name: &str, upload: &ImageUpload) -> ApplicationResult<StoredObject> {
        let path = self.path_for(name)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        }
        tokio::fs::write(&path, upload.data())
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(StoredObject::new(name, self.url_for(name)))
    }

    async fn delete(&self, name: &str) -> ApplicationResult<()> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }
}
