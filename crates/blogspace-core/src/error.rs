//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Server responded with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Post not found")]
    NotFound,

    #[error("Invalid post: {0}")]
    Invalid(#[from] DomainError),
}

/// Key-value persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Write failed: {0}")]
    Write(String),
}

/// Errors surfaced by `PostViewModel` intents.
///
/// `Display` yields the message shown to the user; the underlying cause is
/// kept as the error source.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("All fields are required")]
    Validation(#[source] DomainError),

    #[error("All fields are required")]
    EditorClosed,

    #[error("Post {0} is not loaded")]
    UnknownPost(PostId),

    #[error("Failed to fetch posts. Please try again.")]
    Fetch(#[source] RepoError),

    #[error("Failed to load post.")]
    FetchOne(#[source] RepoError),

    #[error("Failed to create post.")]
    Create(#[source] RepoError),

    #[error("Failed to update post.")]
    Update(#[source] RepoError),

    #[error("Failed to delete post.")]
    Delete(#[source] RepoError),
}
