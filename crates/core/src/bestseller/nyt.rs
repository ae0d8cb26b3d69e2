//! New York Times Books API client.
//!
//! Requires an API key. Without one the client stays constructible but every
//! lookup returns `None` without a request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{correlate, BestsellerSource, OverviewResponse};
use crate::book::{BestsellerInfo, Book};
use crate::config::{BestsellerConfig, Credential};
use crate::metrics::{BESTSELLER_LOOKUPS, EXTERNAL_SERVICE_DURATION};

/// NYT Books API client.
pub struct NytClient {
    client: Client,
    base_url: String,
    api_key: Credential,
}

impl NytClient {
    /// Create a new NYT client.
    pub fn new(config: &BestsellerConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.credential(),
        })
    }

    /// Fetch every current list in one request.
    async fn fetch_overview(&self, api_key: &str) -> Option<OverviewResponse> {
        let _timer = EXTERNAL_SERVICE_DURATION
            .with_label_values(&["bestseller", "overview"])
            .start_timer();

        let url = format!(
            "{}/lists/overview.json?api-key={}",
            self.base_url,
            urlencoding::encode(api_key)
        );

        debug!("Fetching bestseller overview");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Bestseller overview transport failure");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Bestseller overview request failed");
            return None;
        }

        match response.json().await {
            Ok(overview) => Some(overview),
            Err(e) => {
                warn!(error = %e, "Failed to parse bestseller overview");
                None
            }
        }
    }
}

#[async_trait]
impl BestsellerSource for NytClient {
    fn is_enabled(&self) -> bool {
        self.api_key.is_present()
    }

    async fn lookup(&self, book: &Book) -> Option<BestsellerInfo> {
        let Credential::Present(api_key) = &self.api_key else {
            BESTSELLER_LOOKUPS.with_label_values(&["disabled"]).inc();
            return None;
        };

        let Some(overview) = self.fetch_overview(api_key).await else {
            BESTSELLER_LOOKUPS.with_label_values(&["failed"]).inc();
            return None;
        };

        let info = correlate(book, &overview);
        match &info {
            Some(found) => {
                debug!(
                    id = %book.id,
                    list = %found.list_name,
                    rank = found.rank,
                    "Book is on a bestseller list"
                );
                BESTSELLER_LOOKUPS.with_label_values(&["matched"]).inc();
            }
            None => {
                BESTSELLER_LOOKUPS.with_label_values(&["unmatched"]).inc();
            }
        }
        info
    }
}
