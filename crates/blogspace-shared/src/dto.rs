//! Data Transfer Objects - request/response bodies for the posts API.

use blogspace_core::PostDraft;
use serde::{Deserialize, Serialize};

/// Body of `POST /posts/` and `PUT /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub author_name: String,
}

impl From<PostDraft> for PostPayload {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            author_name: draft.author_name,
        }
    }
}

impl From<PostPayload> for PostDraft {
    fn from(payload: PostPayload) -> Self {
        PostDraft::new(payload.title, payload.content, payload.author_name)
    }
}

/// Query string of `GET /search/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Plain acknowledgement, e.g. `{"message": "Post deleted"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
