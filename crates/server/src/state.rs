use std::sync::Arc;

use bookfinder_core::{BestsellerSource, BookCatalog, Config, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn BookCatalog>,
    bestseller: Arc<dyn BestsellerSource>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<dyn BookCatalog>,
        bestseller: Arc<dyn BestsellerSource>,
    ) -> Self {
        Self {
            config,
            catalog,
            bestseller,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> &dyn BookCatalog {
        self.catalog.as_ref()
    }

    pub fn bestseller(&self) -> &dyn BestsellerSource {
        self.bestseller.as_ref()
    }
}
