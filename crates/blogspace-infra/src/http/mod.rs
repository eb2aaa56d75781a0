//! REST post repository - talks to the posts API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use blogspace_core::ports::PostRepository;
use blogspace_core::{Post, PostDraft, PostId, RepoError};
use blogspace_shared::{PostPayload, SearchParams};

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the posts API (e.g., http://localhost:8000)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl HttpConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("BLOGSPACE_API_URL").unwrap_or(defaults.base_url),
            timeout: std::env::var("BLOGSPACE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Post repository backed by the REST API.
pub struct HttpPostRepository {
    client: Client,
    base_url: String,
}

impl HttpPostRepository {
    pub fn new(config: HttpConfig) -> Result<Self, RepoError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, RepoError> {
        Self::new(HttpConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Response, RepoError> {
        let response = request
            .send()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(RepoError::NotFound);
        }

        let body = response.text().await.unwrap_or_default();
        Err(RepoError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RepoError> {
        response
            .json::<T>()
            .await
            .map_err(|e| RepoError::Decode(e.to_string()))
    }
}

/// Pull a human-readable detail out of an error body.
///
/// Understands problem-details and `{"detail": ...}` bodies; anything else is
/// returned trimmed.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let response = Self::send(self.client.get(self.url("/posts/"))).await?;
        Self::decode(response).await
    }

    async fn get(&self, id: PostId) -> Result<Post, RepoError> {
        let response = Self::send(self.client.get(self.url(&format!("/posts/{id}")))).await?;
        Self::decode(response).await
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let request = self
            .client
            .post(self.url("/posts/"))
            .json(&PostPayload::from(draft));
        let post: Post = Self::decode(Self::send(request).await?).await?;

        tracing::debug!(post_id = post.id, "Post created remotely");
        Ok(post)
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let request = self
            .client
            .put(self.url(&format!("/posts/{id}")))
            .json(&PostPayload::from(draft));
        Self::decode(Self::send(request).await?).await
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        Self::send(self.client.delete(self.url(&format!("/posts/{id}")))).await?;
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError> {
        let request = self.client.get(self.url("/search/")).query(&SearchParams {
            query: term.to_string(),
        });
        Self::decode(Self::send(request).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let repo = HttpPostRepository::new(HttpConfig {
            base_url: "http://example.test:8000/".to_string(),
            ..HttpConfig::default()
        })
        .unwrap();

        assert_eq!(repo.url("/posts/"), "http://example.test:8000/posts/");
        assert_eq!(repo.url("/posts/3"), "http://example.test:8000/posts/3");
    }

    #[test]
    fn test_error_detail_from_problem_details() {
        let body = r#"{"type":"about:blank","title":"Unprocessable Entity","status":422,"detail":"Missing required fields: title"}"#;
        assert_eq!(error_detail(body), "Missing required fields: title");
    }

    #[test]
    fn test_error_detail_from_structured_detail() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"}]}"#;
        assert!(error_detail(body).contains("field required"));
    }

    #[test]
    fn test_error_detail_from_plain_text() {
        assert_eq!(error_detail("  Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_detail(""), "");
    }
}
