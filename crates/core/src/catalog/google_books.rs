//! Google Books volumes API client.
//!
//! Works with or without an API key; the key only raises the quota.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::{BookCatalog, CatalogError};
use crate::book::{normalize, Book, RawSearchResponse, RawVolume};
use crate::config::{CatalogConfig, Credential};
use crate::metrics::{CATALOG_REQUESTS, EXTERNAL_SERVICE_DURATION, SEARCH_RESULTS};

/// Maximum number of volumes requested per search.
pub const MAX_RESULTS: u32 = 20;

/// Google Books API client.
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    api_key: Credential,
}

impl GoogleBooksClient {
    /// Create a new catalog client.
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.credential(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        let mut url = format!(
            "{}/volumes?q={}&maxResults={}",
            self.base_url,
            urlencoding::encode(query),
            MAX_RESULTS
        );
        if let Some(key) = self.api_key.as_deref() {
            url.push_str(&format!("&key={}", urlencoding::encode(key)));
        }
        url
    }

    fn volume_url(&self, id: &str) -> String {
        let mut url = format!("{}/volumes/{}", self.base_url, urlencoding::encode(id));
        if let Some(key) = self.api_key.as_deref() {
            url.push_str(&format!("?key={}", urlencoding::encode(key)));
        }
        url
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        let _timer = EXTERNAL_SERVICE_DURATION
            .with_label_values(&["catalog", "search"])
            .start_timer();

        debug!(query = %query, "Catalog search");

        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Catalog search transport failure");
                CatalogError::NetworkError
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Catalog search rate limited");
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            warn!(status = %status, "Catalog search failed");
            return Err(CatalogError::RequestFailed);
        }

        let body: RawSearchResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse catalog search response");
            CatalogError::RequestFailed
        })?;

        let books = body
            .items
            .unwrap_or_default()
            .into_iter()
            .filter(|item| {
                if item.id.is_empty() {
                    warn!("Skipping catalog item without an id");
                    return false;
                }
                true
            })
            .map(normalize)
            .collect();

        Ok(books)
    }

    async fn fetch_volume(&self, id: &str) -> Option<Book> {
        let _timer = EXTERNAL_SERVICE_DURATION
            .with_label_values(&["catalog", "get_by_id"])
            .start_timer();

        debug!(id = %id, "Catalog get by id");

        let response = match self.client.get(self.volume_url(id)).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(id = %id, error = %e, "Catalog lookup transport failure");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(id = %id, status = %status, "Catalog lookup returned no book");
            return None;
        }

        let mut volume: RawVolume = match response.json().await {
            Ok(volume) => volume,
            Err(e) => {
                warn!(id = %id, error = %e, "Failed to parse catalog volume");
                return None;
            }
        };

        volume.volume_info.as_ref()?;
        if volume.id.is_empty() {
            volume.id = id.to_string();
        }

        Some(normalize(volume))
    }
}

#[async_trait]
impl BookCatalog for GoogleBooksClient {
    async fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        if query.trim().is_empty() {
            CATALOG_REQUESTS
                .with_label_values(&["search", "skipped"])
                .inc();
            return Ok(vec![]);
        }

        let result = self.fetch_search(query).await;

        let outcome = match &result {
            Ok(books) if books.is_empty() => "empty",
            Ok(_) => "ok",
            Err(e) => e.label(),
        };
        CATALOG_REQUESTS
            .with_label_values(&["search", outcome])
            .inc();
        if let Ok(books) = &result {
            SEARCH_RESULTS.observe(books.len() as f64);
        }

        result
    }

    async fn get_by_id(&self, id: &str) -> Option<Book> {
        if id.trim().is_empty() {
            return None;
        }

        let book = self.fetch_volume(id).await;
        let outcome = if book.is_some() { "ok" } else { "not_found" };
        CATALOG_REQUESTS
            .with_label_values(&["get_by_id", outcome])
            .inc();
        book
    }
}
