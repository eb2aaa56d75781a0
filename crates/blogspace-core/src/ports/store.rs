use async_trait::async_trait;

use crate::error::StoreError;

/// Key-value persistence for client preferences (bookmarks and the like).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
