//! Plain state types owned and exposed by `PostViewModel`.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Post, PostDraft, PostId};

/// Which slice of the cache the browse view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    All,
    Bookmarked,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Bookmarked => "bookmarked",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Tab::All),
            "bookmarked" => Ok(Tab::Bookmarked),
            other => Err(format!("unknown tab '{other}', expected 'all' or 'bookmarked'")),
        }
    }
}

/// Search mode. While `active`, `results` replace the browse view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<Post>,
    pub active: bool,
}

/// What the create/edit form is doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(PostId),
}

/// Create/edit form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    pub mode: EditorMode,
    pub draft: PostDraft,
}

/// Everything the presentation layer needs to render the post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSnapshot {
    /// Flat, unpaginated search results.
    Search { term: String, results: Vec<Post> },
    Browse(BrowseView),
}

/// Tab view with featured posts and one page of the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    pub tab: Tab,
    pub page: usize,
    pub page_count: usize,
    pub featured: Vec<Post>,
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parse_round_trip() {
        assert_eq!("all".parse::<Tab>(), Ok(Tab::All));
        assert_eq!("bookmarked".parse::<Tab>(), Ok(Tab::Bookmarked));
        assert_eq!(Tab::Bookmarked.to_string(), "bookmarked");
        assert!("starred".parse::<Tab>().is_err());
    }
}
