//! Redis key-value store with connection management.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use blogspace_core::StoreError;
use blogspace_core::ports::KeyValueStore;

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Prepended to every key
    pub key_prefix: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            key_prefix: "blogspace:".to_string(),
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            connect_timeout: std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").unwrap_or(defaults.key_prefix),
        }
    }
}

/// Redis-backed store.
///
/// Uses connection manager for automatic reconnection.
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    pub async fn new(config: RedisConfig) -> Result<Self, StoreError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Unavailable("Connection timed out".to_string()))?
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis store");

        Ok(Self {
            conn,
            key_prefix: config.key_prefix,
        })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, StoreError> {
        Self::new(RedisConfig::from_env()).await
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(self.key(key))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.key(key), value)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(self.key(key))
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get_test_store(key_prefix: &str) -> Option<RedisStore> {
        let config = RedisConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(1),
            key_prefix: key_prefix.to_string(),
        };

        RedisStore::new(config).await.ok()
    }

    #[tokio::test]
    async fn test_redis_store_set_get_delete() {
        let store = match get_test_store("blogspace-test:").await {
            Some(s) => s,
            None => {
                tracing::warn!("Redis not available, skipping test");
                return;
            }
        };

        let key = "round_trip";
        store.set(key, "[1,2]").await.unwrap();
        assert_eq!(store.get(key).await.unwrap().as_deref(), Some("[1,2]"));

        store.set(key, "[2]").await.unwrap();
        assert_eq!(store.get(key).await.unwrap().as_deref(), Some("[2]"));

        store.delete(key).await.unwrap();
        assert_eq!(store.get(key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_store_applies_key_prefix() {
        let (prefixed, bare) = match (
            get_test_store("blogspace-test:").await,
            get_test_store("").await,
        ) {
            (Some(p), Some(b)) => (p, b),
            _ => return,
        };

        assert_eq!(prefixed.key("bookmarkedPosts"), "blogspace-test:bookmarkedPosts");
        assert_eq!(bare.key("bookmarkedPosts"), "bookmarkedPosts");

        prefixed.set("prefix_check", "[7]").await.unwrap();
        assert_eq!(
            bare.get("blogspace-test:prefix_check").await.unwrap().as_deref(),
            Some("[7]")
        );
        assert_eq!(bare.get("prefix_check").await.unwrap(), None);

        prefixed.delete("prefix_check").await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_redis_is_unavailable() {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            connect_timeout: Duration::from_secs(1),
            ..RedisConfig::default()
        };

        let result = RedisStore::new(config).await;

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_default_config() {
        let config = RedisConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.key_prefix, "blogspace:");
    }
}
