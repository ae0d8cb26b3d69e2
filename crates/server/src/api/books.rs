//! Book search and detail handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use bookfinder_core::{load_book_details, Book, BookDetails, CatalogError};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn catalog_error(e: CatalogError) -> ApiError {
    let status = match e {
        CatalogError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        CatalogError::NetworkError | CatalogError::RequestFailed => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn not_found(id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Book not found: {}", id),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/books/search?q=
///
/// A missing or blank `q` yields an empty list.
pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Book>>, ApiError> {
    state
        .catalog()
        .search(&params.q)
        .await
        .map(Json)
        .map_err(catalog_error)
}

/// GET /api/v1/books/{id}
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    state
        .catalog()
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// GET /api/v1/books/{id}/details
///
/// Resolves the id through the catalog, then attaches bestseller placement.
pub async fn get_book_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookDetails>, ApiError> {
    let book = state
        .catalog()
        .get_by_id(&id)
        .await
        .ok_or_else(|| not_found(&id))?;

    let bestseller = state.bestseller().lookup(&book).await;
    Ok(Json(BookDetails { book, bestseller }))
}

/// POST /api/v1/books/details
///
/// Takes a book picked from search results, refreshes it and attaches
/// bestseller placement. Never fails once the body parses.
pub async fn load_details(
    State(state): State<Arc<AppState>>,
    Json(book): Json<Book>,
) -> Json<BookDetails> {
    debug!(id = %book.id, "Loading book details");
    Json(load_book_details(state.catalog(), state.bestseller(), book).await)
}
