pub mod bestseller;
pub mod book;
pub mod catalog;
pub mod config;
pub mod detail;
mod lenient;
pub mod metrics;
pub mod search;
pub mod testing;

pub use bestseller::{correlate, matches, BestsellerSource, NytClient};
pub use book::{normalize, BestsellerInfo, Book};
pub use catalog::{BookCatalog, CatalogError, GoogleBooksClient, MAX_RESULTS};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config, ConfigError,
    Credential, SanitizedConfig,
};
pub use detail::{load_book_details, BookDetails};
pub use search::{SearchCoordinator, SearchPhase, SearchState};
