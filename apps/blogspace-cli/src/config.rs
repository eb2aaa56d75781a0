//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blogspace_infra::HttpConfig;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub http: HttpConfig,
    /// Where bookmarks live when Redis is not in use.
    pub bookmarks_file: PathBuf,
    /// Set when `REDIS_URL` is present.
    pub use_redis: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig::from_env(),
            bookmarks_file: env::var("BLOGSPACE_BOOKMARKS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".blogspace").join("bookmarks.json")),
            use_redis: env::var("REDIS_URL").is_ok(),
        }
    }

    /// Apply a `--api-url` override.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.http.base_url = url;
        }
        self
    }
}
