//! In-memory post repository - backs the development server and tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogspace_core::ports::PostRepository;
use blogspace_core::view::search::local_search;
use blogspace_core::{Post, PostDraft, PostId, RepoError};

/// Posts kept in insertion order, ids assigned sequentially from 1.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Seed the repository. New ids continue after the largest seeded one.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            posts: RwLock::new(posts),
            next_id: AtomicI64::new(next_id),
        }
    }

    fn now() -> String {
        chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn get(&self, id: PostId) -> Result<Post, RepoError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        draft.validate()?;

        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title,
            content: draft.content,
            author_name: draft.author_name,
            date_posted: Self::now(),
        };
        self.posts.write().await.push(post.clone());

        tracing::debug!(post_id = post.id, "Post stored");
        Ok(post)
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        draft.validate()?;

        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.title = draft.title;
        post.content = draft.content;
        post.author_name = draft.author_name;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError> {
        Ok(local_search(&self.posts.read().await, term))
    }
}
