//! Testing utilities and mock implementations.
//!
//! Mocks for the two external service traits, so that search sessions, detail
//! loading and the HTTP facade can be tested without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookfinder_core::testing::{MockBookCatalog, MockBestsellerSource, fixtures};
//!
//! let catalog = MockBookCatalog::new();
//! let bestseller = MockBestsellerSource::new();
//!
//! catalog.set_results("dune", vec![fixtures::book("1", "Dune", "Frank Herbert")]).await;
//! bestseller.add_placement("Dune", fixtures::bestseller_info("Hardcover Fiction", 1, 10)).await;
//!
//! // Use in AppState...
//! ```

mod mock_bestseller;
mod mock_catalog;

pub use mock_bestseller::MockBestsellerSource;
pub use mock_catalog::{MockBookCatalog, RecordedCatalogQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::book::{BestsellerInfo, Book};

    /// Create a test book with reasonable defaults.
    pub fn book(id: &str, title: &str, author: &str) -> Book {
        let mut book = Book::new(id, title, vec![author.to_string()]);
        book.published_year = "2020".to_string();
        book.thumbnail = Some(format!(
            "https://books.google.com/books/content?id={}&zoom=1",
            id
        ));
        book
    }

    /// Create a test bestseller placement.
    pub fn bestseller_info(list_name: &str, rank: u32, weeks_on_list: u32) -> BestsellerInfo {
        BestsellerInfo {
            list_name: list_name.to_string(),
            rank,
            weeks_on_list,
            description: None,
        }
    }

    /// A catalog volume as the Google Books API returns it.
    pub fn volume_json(id: &str, title: &str, author: &str) -> Value {
        json!({
            "id": id,
            "volumeInfo": {
                "title": title,
                "authors": [author],
                "publishedDate": "2020-05-01",
                "imageLinks": {
                    "thumbnail": format!("http://books.google.com/books/content?id={}&zoom=1", id)
                },
                "industryIdentifiers": [
                    {"type": "ISBN_10", "identifier": "0441013597"},
                    {"type": "ISBN_13", "identifier": "9780441013593"}
                ]
            }
        })
    }

    /// A catalog search response wrapping `volumes`.
    pub fn search_response_json(volumes: Vec<Value>) -> Value {
        json!({
            "kind": "books#volumes",
            "totalItems": volumes.len(),
            "items": volumes
        })
    }

    /// A bestseller overview with a single list.
    ///
    /// Entries are `(rank, title, author)`.
    pub fn overview_json(list_name: &str, entries: &[(u32, &str, &str)]) -> Value {
        let books: Vec<Value> = entries
            .iter()
            .map(|(rank, title, author)| {
                json!({
                    "rank": rank,
                    "title": title.to_uppercase(),
                    "author": author,
                    "weeks_on_list": rank * 2,
                    "description": format!("{} by {}.", title, author)
                })
            })
            .collect();

        json!({
            "status": "OK",
            "results": {
                "lists": [{ "list_name": list_name, "books": books }]
            }
        })
    }
}
