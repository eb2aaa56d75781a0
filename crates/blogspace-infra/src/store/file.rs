//! JSON file store - keeps every key in one small JSON object on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use blogspace_core::StoreError;
use blogspace_core::ports::KeyValueStore;

/// File-backed store. Writes go through a temp file and a rename.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Unavailable(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Write(e.to_string()))?;
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::trace!(path = %self.path.display(), keys = values.len(), "Store written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}
