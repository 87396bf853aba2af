// tests/support/mocks/storage.rs
use async_trait::async_trait;
use folio_core::application::{ApplicationResult, ports::storage::BlobStorage};
use folio_core::domain::media::{ImageUpload, StoredObject};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Keeps saved blobs in memory so tests can see what was written and
/// removed.
#[derive(Default)]
pub struct MemoryBlobStorage {
    objects: Mutex<BTreeMap<String, usize>>,
}

impl MemoryBlobStorage {
    pub fn names(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    async fn save(&self, name: &str, upload: &ImageUpload) -> ApplicationResult<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), upload.len());
        Ok(StoredObject::new(name, format!("/media/{name}")))
    }

    async fn delete(&self, name: &str) -> ApplicationResult<()> {
        self.objects.lock().unwrap().remove(name);
        Ok(())
    }
}
