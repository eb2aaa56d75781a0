//! Local search over cached posts.

use crate::domain::Post;

/// Upper bound on suggestions offered for a partial search term.
pub const MAX_SUGGESTIONS: usize = 5;

/// Posts whose title or content contains `term`, ignoring case, in cache order.
pub fn local_search(posts: &[Post], term: &str) -> Vec<Post> {
    let needle = term.to_lowercase();
    posts.iter().filter(|p| p.matches(&needle)).cloned().collect()
}

/// Distinct titles of the first few posts matching `input`.
pub fn suggestions(posts: &[Post], input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    let mut titles: Vec<String> = Vec::new();
    for post in posts
        .iter()
        .filter(|p| p.matches(&needle))
        .take(MAX_SUGGESTIONS)
    {
        if !titles.contains(&post.title) {
            titles.push(post.title.clone());
        }
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str, content: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author_name: "Ada".to_string(),
            date_posted: "2024-01-05T10:00:00".to_string(),
        }
    }

    #[test]
    fn test_local_search_is_case_insensitive() {
        let posts = vec![
            post(1, "Alpha weather", "sun"),
            post(2, "Beta", "rain and weather"),
        ];

        let ids = |found: Vec<Post>| found.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(local_search(&posts, "WEATHER")), vec![1, 2]);
        assert_eq!(ids(local_search(&posts, "beta")), vec![2]);
        assert!(local_search(&posts, "snow").is_empty());
    }

    #[test]
    fn test_suggestions_dedupe_and_cap() {
        let posts: Vec<Post> = (1..=8)
            .map(|i| post(i, if i % 2 == 0 { "Rust tips" } else { "Rust news" }, "body"))
            .chain([post(9, "Other", "rust later")])
            .collect();

        assert_eq!(suggestions(&posts, "rust"), vec!["Rust news", "Rust tips"]);
    }

    #[test]
    fn test_suggestions_only_consider_first_five_matches() {
        let posts: Vec<Post> = (1..=7).map(|i| post(i, &format!("Post {i}"), "x")).collect();
        assert_eq!(suggestions(&posts, "post").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_blank_input_has_no_suggestions() {
        let posts = vec![post(1, "Alpha", "beta")];
        assert!(suggestions(&posts, "  ").is_empty());
    }
}
