//! Plain-text rendering of the view model's output.

use blogspace_core::domain::text::{format_date, paragraphs, reading_time};
use blogspace_core::view::{BrowseView, Tab, ViewSnapshot};
use blogspace_core::{Post, PostId};

/// Render whatever the view model currently shows.
pub fn render_snapshot(snapshot: &ViewSnapshot, bookmarks: &[PostId]) -> String {
    let lines = match snapshot {
        ViewSnapshot::Search { term, results } => search_lines(term, results, bookmarks),
        ViewSnapshot::Browse(view) => browse_lines(view, bookmarks),
    };
    join_lines(lines)
}

/// Newline-terminate every line.
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn post_lines<'a>(
    posts: &'a [Post],
    bookmarks: &'a [PostId],
) -> impl Iterator<Item = String> + 'a {
    posts
        .iter()
        .map(|post| post_line(post, bookmarks.contains(&post.id)))
}

fn search_lines(term: &str, results: &[Post], bookmarks: &[PostId]) -> Vec<String> {
    if results.is_empty() {
        return vec![
            "No results found".to_string(),
            format!("We couldn't find any posts matching \"{term}\". Try a different search term."),
        ];
    }

    let mut lines = vec![format!("Search Results for \"{term}\" ({})", results.len())];
    lines.extend(post_lines(results, bookmarks));
    lines
}

fn browse_lines(view: &BrowseView, bookmarks: &[PostId]) -> Vec<String> {
    if view.featured.is_empty() {
        let (title, hint) = match view.tab {
            Tab::All => (
                "No posts found",
                "We couldn't find any posts. Create a new post to get started.",
            ),
            Tab::Bookmarked => (
                "No bookmarked posts",
                "You haven't bookmarked any posts yet. Bookmark the ones you want to read later.",
            ),
        };
        return vec![title.to_string(), hint.to_string()];
    }

    let mut lines = vec!["Featured".to_string()];
    lines.extend(post_lines(&view.featured, bookmarks));

    if view.page_count > 0 {
        lines.push(String::new());
        lines.push(format!("Recent (page {} of {})", view.page, view.page_count));
        lines.extend(post_lines(&view.posts, bookmarks));
    }
    lines
}

/// One summary line per post.
pub fn post_line(post: &Post, bookmarked: bool) -> String {
    format!(
        "{} [{}] {} | by {} | {} | {} min read",
        if bookmarked { "*" } else { " " },
        post.id,
        post.title,
        post.author_name,
        format_date(&post.date_posted),
        reading_time(&post.content),
    )
}

/// Full post for the detail view.
pub fn render_post(post: &Post, bookmarked: bool) -> String {
    let mut lines = vec![
        post.title.clone(),
        format!(
            "by {} | {} | {} min read{}",
            post.author_name,
            format_date(&post.date_posted),
            reading_time(&post.content),
            if bookmarked { " | bookmarked" } else { "" }
        ),
        String::new(),
    ];
    lines.extend(paragraphs(&post.content).into_iter().map(str::to_string));
    join_lines(lines)
}
