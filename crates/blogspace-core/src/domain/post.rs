use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned post identifier.
pub type PostId = i64;

/// Post entity - a blog entry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_name: String,
    /// Timestamp string assigned by the server on creation.
    pub date_posted: String,
}

impl Post {
    /// Case-insensitive substring match on title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    /// The editable fields of this post.
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            author_name: self.author_name.clone(),
        }
    }
}

/// The user-editable part of a post, sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author_name: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_name: author_name.into(),
        }
    }

    /// Every field is required.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author_name", &self.author_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingFields(missing.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str) -> Post {
        Post {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            author_name: "Ada".to_string(),
            date_posted: "2024-01-05T10:00:00".to_string(),
        }
    }

    #[test]
    fn test_matches_title_or_content() {
        let p = post("Alpha Weather", "sun");
        assert!(p.matches("weather"));
        assert!(p.matches("su"));
        assert!(!p.matches("rain"));
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        assert!(PostDraft::new("t", "c", "a").validate().is_ok());

        let err = PostDraft::new("", "c", "").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: title, author_name"
        );
    }

    #[test]
    fn test_draft_copies_editable_fields() {
        let p = post("Title", "Body");
        assert_eq!(p.draft(), PostDraft::new("Title", "Body", "Ada"));
    }

    #[test]
    fn test_post_deserializes_backend_shape() {
        let json = r#"{"id":7,"title":"T","content":"C","author_name":"A","date_posted":"2024-01-05T10:00:00.123456"}"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.date_posted, "2024-01-05T10:00:00.123456");
    }
}
