use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Post repository - the remote source of truth for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every post, in server order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Fetch a single post.
    async fn get(&self, id: PostId) -> Result<Post, RepoError>;

    /// Create a post; the server assigns `id` and `date_posted`.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Replace the editable fields of an existing post.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError>;

    /// Delete a post by its ID.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Server-side search. Ordering is defined by the server.
    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError>;
}
