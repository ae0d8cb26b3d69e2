//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that builds the full router with mock
//! catalog and bestseller sources injected, so the HTTP facade can be
//! exercised without network access.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bookfinder_core::config::CatalogConfig;
use bookfinder_core::testing::{MockBestsellerSource, MockBookCatalog};
use bookfinder_core::{BestsellerSource, BookCatalog, Config};
use bookfinder_server::state::AppState;

/// Re-export fixtures for test convenience
pub use bookfinder_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///     fixture.catalog.set_results("dune", vec![fixtures::book("1", "Dune", "Frank Herbert")]).await;
///
///     let response = fixture.get("/api/v1/books/search?q=dune").await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure search results and lookups
    pub catalog: Arc<MockBookCatalog>,
    /// Mock bestseller source - configure placements
    pub bestseller: Arc<MockBestsellerSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an enabled bestseller source.
    pub async fn new() -> Self {
        Self::with_bestseller(MockBestsellerSource::new()).await
    }

    /// Create a test fixture whose bestseller source has no API key.
    pub async fn without_bestseller() -> Self {
        Self::with_bestseller(MockBestsellerSource::disabled()).await
    }

    async fn with_bestseller(bestseller: MockBestsellerSource) -> Self {
        let catalog = Arc::new(MockBookCatalog::new());
        let bestseller = Arc::new(bestseller);

        let config = Config {
            catalog: CatalogConfig {
                api_key: Some("test-catalog-key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&catalog) as Arc<dyn BookCatalog>,
            Arc::clone(&bestseller) as Arc<dyn BestsellerSource>,
        ));

        let router = bookfinder_server::api::create_router(state);

        Self {
            router,
            catalog,
            bestseller,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).into_owned())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
