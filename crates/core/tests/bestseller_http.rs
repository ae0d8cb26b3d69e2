//! Bestseller client tests against a local fake of the lists overview API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use bookfinder_core::config::BestsellerConfig;
use bookfinder_core::testing::fixtures;
use bookfinder_core::{BestsellerSource, Book, NytClient};

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Overview endpoint returning `body`, counting hits and recording `api-key`.
struct FakeOverview {
    hits: Arc<AtomicUsize>,
    keys: Arc<Mutex<Vec<String>>>,
}

impl FakeOverview {
    fn new() -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn router(&self, status: StatusCode, body: String) -> Router {
        let hits = self.hits.clone();
        let keys = self.keys.clone();
        Router::new().route(
            "/lists/overview.json",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let hits = hits.clone();
                let keys = keys.clone();
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if let Some(key) = params.get("api-key") {
                        keys.lock().unwrap().push(key.clone());
                    }
                    (status, body)
                }
            }),
        )
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn client(base_url: &str, api_key: Option<&str>) -> NytClient {
    NytClient::new(&BestsellerConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(String::from),
        timeout_secs: 5,
    })
    .unwrap()
}

fn dune() -> Book {
    Book::new("dune-1", "Dune", vec!["Frank Herbert".to_string()])
}

fn overview_body() -> String {
    let overview: Value = fixtures::overview_json(
        "Hardcover Fiction",
        &[(1, "Fourth Wing", "Rebecca Yarros"), (4, "Dune", "Frank Herbert")],
    );
    overview.to_string()
}

#[tokio::test]
async fn test_lookup_finds_placement() {
    let fake = FakeOverview::new();
    let base = serve(fake.router(StatusCode::OK, overview_body())).await;

    let info = client(&base, Some("nyt-key")).lookup(&dune()).await.unwrap();

    assert_eq!(info.list_name, "Hardcover Fiction");
    assert_eq!(info.rank, 4);
    assert_eq!(info.weeks_on_list, 8);
    assert_eq!(info.description.as_deref(), Some("Dune by Frank Herbert."));
    assert_eq!(*fake.keys.lock().unwrap(), vec!["nyt-key".to_string()]);
}

#[tokio::test]
async fn test_lookup_without_match() {
    let fake = FakeOverview::new();
    let base = serve(fake.router(StatusCode::OK, overview_body())).await;

    let book = Book::new("x", "Project Hail Mary", vec!["Andy Weir".to_string()]);
    assert!(client(&base, Some("nyt-key")).lookup(&book).await.is_none());
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_lookup_ignores_malformed_entries() {
    let fake = FakeOverview::new();
    let body = r#"{"status": "OK", "results": {"lists": [
        {"list_name": "Combined Print", "books": [{"rank": -1, "title": "Broken", "author": "Nobody"}]},
        {"list_name": "Hardcover Fiction", "books": [{"rank": 5, "title": "Dune", "author": "Frank Herbert", "weeks_on_list": 3}]}
    ]}}"#;
    let base = serve(fake.router(StatusCode::OK, body.to_string())).await;

    let info = client(&base, Some("nyt-key")).lookup(&dune()).await.unwrap();

    assert_eq!(info.list_name, "Hardcover Fiction");
    assert_eq!(info.rank, 5);
    assert_eq!(info.weeks_on_list, 3);
}

#[tokio::test]
async fn test_lookup_without_key_makes_no_request() {
    let fake = FakeOverview::new();
    let base = serve(fake.router(StatusCode::OK, overview_body())).await;

    let client = client(&base, Some("   "));
    assert!(!client.is_enabled());
    assert!(client.lookup(&dune()).await.is_none());
    assert_eq!(fake.hits(), 0);
}

#[tokio::test]
async fn test_lookup_server_error_is_none() {
    let fake = FakeOverview::new();
    let base = serve(fake.router(StatusCode::UNAUTHORIZED, r#"{"fault": "bad key"}"#.to_string())).await;

    assert!(client(&base, Some("nyt-key")).lookup(&dune()).await.is_none());
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_lookup_unreadable_body_is_none() {
    let fake = FakeOverview::new();
    let base = serve(fake.router(StatusCode::OK, "not json".to_string())).await;

    assert!(client(&base, Some("nyt-key")).lookup(&dune()).await.is_none());
}

#[tokio::test]
async fn test_lookup_empty_overview_is_none() {
    let fake = FakeOverview::new();
    let base = serve(fake.router(StatusCode::OK, r#"{"status": "OK"}"#.to_string())).await;

    assert!(client(&base, Some("nyt-key")).lookup(&dune()).await.is_none());
}

#[tokio::test]
async fn test_lookup_connection_refused_is_none() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{}", addr), Some("nyt-key"));
    assert!(client.is_enabled());
    assert!(client.lookup(&dune()).await.is_none());
}
