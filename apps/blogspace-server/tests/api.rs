//! Drives the client stack (view model + HTTP repository) against a live server.

use std::net::TcpListener;
use std::sync::Arc;

use blogspace_core::ports::PostRepository;
use blogspace_core::view::{Tab, ViewSnapshot};
use blogspace_core::{PostDraft, PostViewModel, RepoError, ViewError};
use blogspace_infra::{HttpConfig, HttpPostRepository, InMemoryStore};
use blogspace_server::state::AppState;

/// Start the API on an ephemeral port and return its base URL.
fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().expect("no local addr").port();
    let server = blogspace_server::run(listener, AppState::in_memory()).expect("failed to start");
    tokio::spawn(server);
    format!("http://127.0.0.1:{port}")
}

fn repository(base_url: &str) -> Arc<HttpPostRepository> {
    let config = HttpConfig {
        base_url: base_url.to_string(),
        ..HttpConfig::default()
    };
    Arc::new(HttpPostRepository::new(config).expect("client"))
}

fn draft(n: usize) -> PostDraft {
    PostDraft::new(format!("Post {n}"), format!("Body of post {n}"), "Ada")
}

#[tokio::test]
async fn health_check_works() {
    let base_url = spawn_app();

    let response = reqwest::get(format!("{base_url}/health")).await.unwrap();

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn repository_round_trip() {
    let repo = repository(&spawn_app());

    let created = repo.create(draft(1)).await.unwrap();
    assert_eq!(created.id, 1);
    assert!(!created.date_posted.is_empty());

    let updated = repo
        .update(created.id, PostDraft::new("Renamed", "New body", "Grace"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date_posted, created.date_posted);
    assert_eq!(repo.get(created.id).await.unwrap(), updated);

    assert_eq!(repo.search("renamed").await.unwrap(), vec![updated]);

    repo.delete(created.id).await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());
    assert!(matches!(repo.delete(created.id).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn rejected_drafts_carry_server_detail() {
    let repo = repository(&spawn_app());

    let err = repo
        .create(PostDraft::new("Title", "", "Ada"))
        .await
        .unwrap_err();

    match err {
        RepoError::Status { status, detail } => {
            assert_eq!(status, 422);
            assert_eq!(detail, "Missing required fields: content");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn view_model_bookmark_scenario() {
    let repo = repository(&spawn_app());
    for n in 1..=5 {
        repo.create(draft(n)).await.unwrap();
    }

    let vm = PostViewModel::open(repo, Arc::new(InMemoryStore::new())).await;
    assert_eq!(vm.load_all().await.unwrap(), 5);

    vm.toggle_bookmark(5).await;
    vm.set_tab(Tab::Bookmarked);

    let filtered: Vec<i64> = vm.filtered().iter().map(|p| p.id).collect();
    assert_eq!(filtered, vec![5]);
    assert_eq!(vm.page(), 1);

    vm.delete(5).await.unwrap();
    assert!(vm.bookmarks().is_empty());
    assert!(vm.filtered().is_empty());
}

#[tokio::test]
async fn view_model_create_and_search() {
    let repo = repository(&spawn_app());
    let vm = PostViewModel::open(repo, Arc::new(InMemoryStore::new())).await;
    vm.load_all().await.unwrap();

    vm.create(PostDraft::new("Alpha weather", "sun", "Ada"))
        .await
        .unwrap();
    let newest = vm
        .create(PostDraft::new("Beta", "rain and weather", "Bo"))
        .await
        .unwrap();
    assert_eq!(vm.posts()[0], newest);

    let results = vm.search("weather").await;
    assert_eq!(results.len(), 2);
    assert!(matches!(vm.snapshot(), ViewSnapshot::Search { .. }));

    let err = vm.update(99, draft(9)).await.unwrap_err();
    assert!(matches!(err, ViewError::UnknownPost(99)));
}

#[tokio::test]
async fn unreachable_server_degrades_search() {
    let repo = repository(&spawn_app());
    repo.create(PostDraft::new("Offline reading", "cached", "Ada"))
        .await
        .unwrap();

    let vm = PostViewModel::open(repo, Arc::new(InMemoryStore::new())).await;
    vm.load_all().await.unwrap();

    // A client pointed at a port nothing listens on.
    let dead = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        repository(&format!("http://127.0.0.1:{port}"))
    };
    let offline = PostViewModel::open(dead, Arc::new(InMemoryStore::new())).await;
    assert!(offline.load_all().await.is_err());
    assert_eq!(
        offline.error().as_deref(),
        Some("Failed to fetch posts. Please try again.")
    );

    assert_eq!(vm.search("offline").await.len(), 1);

    // Search against the dead server falls back to the (empty) cache quietly.
    offline.clear_error();
    assert!(offline.search("offline").await.is_empty());
    assert!(offline.search_state().active);
    assert_eq!(offline.error(), None);
}
