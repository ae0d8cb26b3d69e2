//! End-to-end tests with mocked external dependencies.
//!
//! These tests run the full router in-process with mock implementations
//! for the book catalog and the bestseller lists.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use bookfinder_core::CatalogError;

use common::{fixtures, TestFixture};

// =============================================================================
// Basic API Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["bestseller_enabled"], true);
}

#[tokio::test]
async fn test_health_reports_disabled_bestseller() {
    let fixture = TestFixture::without_bestseller().await;
    let response = fixture.get("/api/v1/health").await;

    assert_eq!(response.body["bestseller_enabled"], false);
}

#[tokio::test]
async fn test_config_hides_api_keys() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["catalog"]["api_key_configured"], true);
    assert_eq!(response.body["bestseller"]["api_key_configured"], false);
    assert_eq!(response.body["search"]["debounce_ms"], 400);
    assert!(!response.body.to_string().contains("test-catalog-key"));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new().await;
    fixture.get("/api/v1/health").await;

    let (status, body) = fixture.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("bookfinder_http_requests_total"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_returns_books() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_results(
            "dune",
            vec![
                fixtures::book("dune-1", "Dune", "Frank Herbert"),
                fixtures::book("dune-2", "Dune Messiah", "Frank Herbert"),
            ],
        )
        .await;

    let response = fixture.get("/api/v1/books/search?q=dune").await;

    assert_eq!(response.status, StatusCode::OK);
    let books = response.body.as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["id"], "dune-1");
    assert_eq!(books[0]["authors"][0], "Frank Herbert");
    assert_eq!(books[0]["publishedYear"], "2020");
    assert_eq!(books[1]["title"], "Dune Messiah");
    assert_eq!(fixture.catalog.searched_queries().await, vec!["dune"]);
}

#[tokio::test]
async fn test_search_decodes_query() {
    let fixture = TestFixture::new().await;

    fixture.get("/api/v1/books/search?q=the%20left%20hand").await;

    assert_eq!(
        fixture.catalog.searched_queries().await,
        vec!["the left hand"]
    );
}

#[tokio::test]
async fn test_search_without_query_is_empty() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/books/search").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));

    let response = fixture.get("/api/v1/books/search?q=%20%20").await;
    assert_eq!(response.body, json!([]));
    assert_eq!(fixture.catalog.query_count().await, 0);
}

#[tokio::test]
async fn test_search_rate_limited() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_next_error(CatalogError::RateLimited)
        .await;

    let response = fixture.get("/api/v1/books/search?q=dune").await;

    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.body["error"], "Too many requests");
}

#[tokio::test]
async fn test_search_network_error() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_next_error(CatalogError::NetworkError)
        .await;

    let response = fixture.get("/api/v1/books/search?q=dune").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.body["error"],
        "Network error. Please check your connection"
    );
}

#[tokio::test]
async fn test_search_request_failed() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_next_error(CatalogError::RequestFailed)
        .await;

    let response = fixture.get("/api/v1/books/search?q=dune").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "Could not load books. Try again.");
}

// =============================================================================
// Book lookup and details
// =============================================================================

#[tokio::test]
async fn test_get_book() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_book(fixtures::book("dune-1", "Dune", "Frank Herbert"))
        .await;

    let response = fixture.get("/api/v1/books/dune-1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Dune");
}

#[tokio::test]
async fn test_get_book_not_found() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/books/missing").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Book not found: missing");
}

#[tokio::test]
async fn test_book_details_with_placement() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .add_book(fixtures::book("dune-1", "Dune", "Frank Herbert"))
        .await;
    fixture
        .bestseller
        .add_placement("Dune", fixtures::bestseller_info("Hardcover Fiction", 3, 12))
        .await;

    let response = fixture.get("/api/v1/books/dune-1/details").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["book"]["id"], "dune-1");
    assert_eq!(response.body["bestseller"]["listName"], "Hardcover Fiction");
    assert_eq!(response.body["bestseller"]["rank"], 3);
    assert_eq!(response.body["bestseller"]["weeksOnList"], 12);
}

#[tokio::test]
async fn test_book_details_without_placement() {
    let fixture = TestFixture::without_bestseller().await;
    fixture
        .catalog
        .add_book(fixtures::book("dune-1", "Dune", "Frank Herbert"))
        .await;

    let response = fixture.get("/api/v1/books/dune-1/details").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("bestseller").is_none());
}

#[tokio::test]
async fn test_book_details_not_found() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/books/missing/details").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(fixture.bestseller.looked_up_titles().await.is_empty());
}

#[tokio::test]
async fn test_load_details_from_selected_book() {
    let fixture = TestFixture::new().await;
    let mut refreshed = fixtures::book("dune-1", "Dune", "Frank Herbert");
    refreshed.description = Some("<p>Arrakis.</p>".to_string());
    fixture.catalog.add_book(refreshed).await;
    fixture
        .bestseller
        .add_placement("Dune", fixtures::bestseller_info("Paperback", 1, 40))
        .await;

    let response = fixture
        .post(
            "/api/v1/books/details",
            json!({
                "id": "dune-1",
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "publishedYear": "1965"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["book"]["description"], "<p>Arrakis.</p>");
    assert_eq!(response.body["bestseller"]["listName"], "Paperback");
}

#[tokio::test]
async fn test_load_details_keeps_selected_book_when_refresh_fails() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .post(
            "/api/v1/books/details",
            json!({
                "id": "gone",
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "publishedYear": "1965"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["book"]["publishedYear"], "1965");
    assert_eq!(fixture.catalog.looked_up_ids().await, vec!["gone"]);
}
