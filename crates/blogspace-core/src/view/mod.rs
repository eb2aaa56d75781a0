//! The post view model - cached posts plus the state the UI derives from them.
//!
//! `PostViewModel` owns four independent pieces of state: the post cache, the
//! bookmark set, the search state, and the tab/page cursor. Every intent either
//! mutates that state directly or calls the repository and applies the result
//! once the call resolves. The lock is never held across an await, so several
//! intents may be in flight at once; the last one to resolve wins, except that a
//! search response is dropped once search has moved on.

mod bookmarks;
pub mod pagination;
pub mod search;
mod state;


use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Post, PostDraft, PostId};
use crate::error::ViewError;
use crate::ports::{KeyValueStore, PostRepository};

pub use bookmarks::{BOOKMARKS_KEY, BookmarkSet};
pub use pagination::{FEATURED_COUNT, PAGE_SIZE, Page, paginate};
pub use state::{BrowseView, Editor, EditorMode, SearchState, Tab, ViewSnapshot};

#[derive(Debug)]
struct State {
    posts: Vec<Post>,
    bookmarks: BookmarkSet,
    search: SearchState,
    tab: Tab,
    page: usize,
    editor: Editor,
    selected: Option<Post>,
    error: Option<String>,
    /// Bumped on every committed change to `posts`.
    generation: u64,
    /// Bumped on every change to `bookmarks`.
    bookmarks_version: u64,
}

impl State {
    fn new(bookmarks: BookmarkSet) -> Self {
        Self {
            posts: Vec::new(),
            bookmarks,
            search: SearchState::default(),
            tab: Tab::All,
            page: 1,
            editor: Editor::default(),
            selected: None,
            error: None,
            generation: 0,
            bookmarks_version: 0,
        }
    }

    fn filtered(&self) -> Vec<Post> {
        match self.tab {
            Tab::All => self.posts.clone(),
            Tab::Bookmarked => self
                .posts
                .iter()
                .filter(|p| self.bookmarks.contains(p.id))
                .cloned()
                .collect(),
        }
    }

    fn replace_cached(&mut self, post: &Post) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => {
                *slot = post.clone();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    fn close_editor(&mut self) {
        self.editor = Editor::default();
        self.error = None;
    }
}

/// View model for the post list screen.
pub struct PostViewModel {
    repo: Arc<dyn PostRepository>,
    store: Arc<dyn KeyValueStore>,
    state: Mutex<State>,
}

impl PostViewModel {
    /// Build a view model, reading persisted bookmarks from `store`.
    pub async fn open(repo: Arc<dyn PostRepository>, store: Arc<dyn KeyValueStore>) -> Self {
        let bookmarks = BookmarkSet::load(store.as_ref()).await;
        tracing::debug!(bookmarks = bookmarks.len(), "Post view model opened");

        Self {
            repo,
            store,
            state: Mutex::new(State::new(bookmarks)),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fail(&self, err: ViewError) -> ViewError {
        match std::error::Error::source(&err) {
            Some(cause) => tracing::warn!(error = %err, cause = %cause, "Post intent failed"),
            None => tracing::warn!(error = %err, "Post intent failed"),
        }
        self.state().error = Some(err.to_string());
        err
    }

    /// Write the bookmark set back until the store holds the newest version.
    ///
    /// Writes from concurrent toggles may land in any order; whichever caller
    /// sees the set change under its write writes again.
    async fn persist_bookmarks(&self) {
        loop {
            let (version, bookmarks) = {
                let state = self.state();
                (state.bookmarks_version, state.bookmarks.clone())
            };
            bookmarks.persist(self.store.as_ref()).await;

            let current = self.state().bookmarks_version;
            if current == version {
                return;
            }
            tracing::debug!(written = version, current, "Bookmarks changed while persisting");
        }
    }

    // ---------------------------------------------------------------------
    // Repository-backed intents
    // ---------------------------------------------------------------------

    /// Replace the cache with the server's post list.
    ///
    /// Returns the number of posts loaded. On failure the cache is untouched.
    pub async fn load_all(&self) -> Result<usize, ViewError> {
        let issued_at = self.state().generation;

        let posts = match self.repo.list().await {
            Ok(posts) => posts,
            Err(e) => return Err(self.fail(ViewError::Fetch(e))),
        };

        let mut state = self.state();
        if state.generation != issued_at {
            tracing::warn!(
                issued_at,
                current = state.generation,
                "Post list resolved after newer local changes; overwriting them"
            );
        }
        state.posts = posts;
        state.generation += 1;
        tracing::debug!(count = state.posts.len(), "Posts loaded");
        Ok(state.posts.len())
    }

    /// Fetch one post from the server and select it.
    ///
    /// A cached copy with the same id is refreshed in place.
    pub async fn fetch_post(&self, id: PostId) -> Result<Post, ViewError> {
        let post = match self.repo.get(id).await {
            Ok(post) => post,
            Err(e) => return Err(self.fail(ViewError::FetchOne(e))),
        };

        let mut state = self.state();
        state.replace_cached(&post);
        state.selected = Some(post.clone());
        Ok(post)
    }

    /// Create a post and put it at the front of the cache.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, ViewError> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(ViewError::Validation(e)));
        }

        let post = match self.repo.create(draft).await {
            Ok(post) => post,
            Err(e) => return Err(self.fail(ViewError::Create(e))),
        };

        let mut state = self.state();
        state.posts.insert(0, post.clone());
        state.generation += 1;
        state.close_editor();
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Replace a cached post's fields through the server.
    ///
    /// `id` must be in the cache; otherwise nothing is sent.
    pub async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, ViewError> {
        if let Err(e) = draft.validate() {
            return Err(self.fail(ViewError::Validation(e)));
        }
        let tracked = self.state().posts.iter().any(|p| p.id == id);
        if !tracked {
            return Err(self.fail(ViewError::UnknownPost(id)));
        }

        let post = match self.repo.update(id, draft).await {
            Ok(post) => post,
            Err(e) => return Err(self.fail(ViewError::Update(e))),
        };

        let mut state = self.state();
        if !state.replace_cached(&post) {
            tracing::debug!(post_id = id, "Updated post left the cache while in flight");
        }
        state.close_editor();
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    /// Delete a post, dropping it from the cache and the bookmark set.
    pub async fn delete(&self, id: PostId) -> Result<(), ViewError> {
        if let Err(e) = self.repo.delete(id).await {
            return Err(self.fail(ViewError::Delete(e)));
        }

        let was_bookmarked = {
            let mut state = self.state();
            state.posts.retain(|p| p.id != id);
            state.generation += 1;
            if state.selected.as_ref().is_some_and(|p| p.id == id) {
                state.selected = None;
            }
            let removed = state.bookmarks.remove(id);
            if removed {
                state.bookmarks_version += 1;
            }
            removed
        };
        tracing::info!(post_id = id, "Post deleted");

        if was_bookmarked {
            self.persist_bookmarks().await;
        }
        Ok(())
    }

    /// Search posts, falling back to the cache if the server search fails.
    ///
    /// A blank term leaves search mode. A response that arrives after search
    /// was cleared or moved to another term is dropped. Returns the results
    /// now in effect.
    pub async fn search(&self, term: &str) -> Vec<Post> {
        {
            let mut state = self.state();
            state.search.term = term.to_string();
            if term.trim().is_empty() {
                state.search.results.clear();
                state.search.active = false;
                return Vec::new();
            }
            state.search.active = true;
        }

        let results = match self.repo.search(term).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(term, error = %e, "Server search failed, searching cached posts");
                let state = self.state();
                search::local_search(&state.posts, term)
            }
        };

        let mut state = self.state();
        if !state.search.active || state.search.term != term {
            tracing::debug!(term, "Search superseded while in flight; dropping results");
            return state.search.results.clone();
        }
        state.search.results = results.clone();
        results
    }

    // ---------------------------------------------------------------------
    // Local intents
    // ---------------------------------------------------------------------

    /// Leave search mode.
    pub fn clear_search(&self) {
        self.state().search = SearchState::default();
    }

    /// Titles to offer while the user is typing `input`.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        search::suggestions(&self.state().posts, input)
    }

    /// Search the cache for a picked suggestion, without a server round trip.
    pub fn select_suggestion(&self, suggestion: &str) -> Vec<Post> {
        let mut state = self.state();
        let results = search::local_search(&state.posts, suggestion);
        state.search = SearchState {
            term: suggestion.to_string(),
            results: results.clone(),
            active: true,
        };
        results
    }

    /// Switch tabs and go back to the first page.
    pub fn set_tab(&self, tab: Tab) {
        let mut state = self.state();
        state.tab = tab;
        state.page = 1;
    }

    /// Move to `page`. Pages past the end are allowed and render empty.
    pub fn set_page(&self, page: usize) {
        self.state().page = page.max(1);
    }

    /// Flip the bookmark on `id`. Returns whether it is now bookmarked.
    pub async fn toggle_bookmark(&self, id: PostId) -> bool {
        let bookmarked = {
            let mut state = self.state();
            state.bookmarks_version += 1;
            state.bookmarks.toggle(id)
        };
        tracing::debug!(post_id = id, bookmarked, "Bookmark toggled");

        self.persist_bookmarks().await;
        bookmarked
    }

    // ---------------------------------------------------------------------
    // Editor
    // ---------------------------------------------------------------------

    /// Open an empty form for a new post.
    pub fn open_create(&self) {
        let mut state = self.state();
        state.editor = Editor {
            mode: EditorMode::Creating,
            draft: PostDraft::default(),
        };
        state.error = None;
    }

    /// Open the form on a cached post.
    pub fn open_edit(&self, id: PostId) -> Result<(), ViewError> {
        let mut state = self.state();
        let Some(post) = state.posts.iter().find(|p| p.id == id) else {
            drop(state);
            return Err(self.fail(ViewError::UnknownPost(id)));
        };
        let draft = post.draft();
        state.editor = Editor {
            mode: EditorMode::Editing(id),
            draft,
        };
        state.error = None;
        Ok(())
    }

    pub fn set_draft(&self, draft: PostDraft) {
        self.state().editor.draft = draft;
    }

    pub fn close_editor(&self) {
        self.state().close_editor();
    }

    /// Send the form: create or update depending on how it was opened.
    pub async fn submit_editor(&self) -> Result<Post, ViewError> {
        let Editor { mode, draft } = self.state().editor.clone();
        match mode {
            EditorMode::Creating => self.create(draft).await,
            EditorMode::Editing(id) => self.update(id, draft).await,
            EditorMode::Closed => Err(self.fail(ViewError::EditorClosed)),
        }
    }

    // ---------------------------------------------------------------------
    // Selection and errors
    // ---------------------------------------------------------------------

    /// Select a cached post for the detail view.
    pub fn select(&self, id: PostId) -> Option<Post> {
        let mut state = self.state();
        let post = state.posts.iter().find(|p| p.id == id).cloned();
        state.selected = post.clone();
        post
    }

    pub fn clear_selection(&self) {
        self.state().selected = None;
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn posts(&self) -> Vec<Post> {
        self.state().posts.clone()
    }

    /// The tab's posts, in cache order.
    pub fn filtered(&self) -> Vec<Post> {
        self.state().filtered()
    }

    pub fn search_state(&self) -> SearchState {
        self.state().search.clone()
    }

    pub fn tab(&self) -> Tab {
        self.state().tab
    }

    pub fn page(&self) -> usize {
        self.state().page
    }

    pub fn editor(&self) -> Editor {
        self.state().editor.clone()
    }

    pub fn selected(&self) -> Option<Post> {
        self.state().selected.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn is_bookmarked(&self, id: PostId) -> bool {
        self.state().bookmarks.contains(id)
    }

    pub fn bookmarks(&self) -> Vec<PostId> {
        self.state().bookmarks.ids()
    }

    /// Derive what to render right now.
    pub fn snapshot(&self) -> ViewSnapshot {
        let state = self.state();
        if state.search.active {
            return ViewSnapshot::Search {
                term: state.search.term.clone(),
                results: state.search.results.clone(),
            };
        }

        let filtered = state.filtered();
        let page = paginate(&filtered, state.page);
        ViewSnapshot::Browse(BrowseView {
            tab: state.tab,
            page: state.page,
            page_count: page.page_count,
            featured: page.featured.to_vec(),
            posts: page.items.to_vec(),
        })
    }
}
