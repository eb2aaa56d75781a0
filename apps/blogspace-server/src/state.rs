//! Application state - shared across all handlers.

use std::sync::Arc;

use blogspace_core::ports::PostRepository;
use blogspace_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post repository");
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }
}
