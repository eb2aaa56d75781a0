//! Client-side bookmark set, persisted through a `KeyValueStore`.

use std::collections::BTreeSet;

use crate::domain::PostId;
use crate::ports::KeyValueStore;

/// Storage key the bookmark list lives under.
pub const BOOKMARKS_KEY: &str = "bookmarkedPosts";

/// Set of bookmarked post ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: BTreeSet<PostId>,
}

impl BookmarkSet {
    pub fn contains(&self, id: PostId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns whether it is now bookmarked.
    pub fn toggle(&mut self, id: PostId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: PostId) -> bool {
        self.ids.remove(&id)
    }

    pub fn ids(&self) -> Vec<PostId> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Read the persisted set. Any failure yields an empty set.
    pub async fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(BOOKMARKS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read bookmarks, starting empty");
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<PostId>>(&raw) {
            Ok(ids) => Self {
                ids: ids.into_iter().collect(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Stored bookmarks are malformed, starting empty");
                Self::default()
            }
        }
    }

    /// Write the set back. Failures are logged and otherwise ignored.
    pub async fn persist(&self, store: &dyn KeyValueStore) {
        let raw = match serde_json::to_string(&self.ids()) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize bookmarks");
                return;
            }
        };

        if let Err(e) = store.set(BOOKMARKS_KEY, &raw).await {
            tracing::warn!(error = %e, "Failed to persist bookmarks");
        }
    }
}

impl FromIterator<PostId> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = PostId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
