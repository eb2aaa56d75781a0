//! In-memory key-value store - used in tests and when nothing should persist.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogspace_core::StoreError;
use blogspace_core::ports::KeyValueStore;

/// In-memory store using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").await.unwrap();
        store.delete("key1").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), None);
    }
}
