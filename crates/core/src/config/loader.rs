use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable holding the book catalog API key.
pub const CATALOG_API_KEY_ENV: &str = "GOOGLE_BOOKS_API_KEY";

/// Environment variable holding the bestseller API key.
pub const BESTSELLER_API_KEY_ENV: &str = "NYT_API_KEY";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    with_env(Figment::new().merge(Toml::file(path)))
}

/// Load configuration from defaults and environment variables only
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    with_env(Figment::from(Serialized::defaults(Config::default())))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// `BOOKFINDER_CATALOG__BASE_URL` style overrides, then the plain API key variables.
fn with_env(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed("BOOKFINDER_").split("__"))
        .merge(
            Env::raw()
                .only(&[CATALOG_API_KEY_ENV])
                .map(|_| "catalog.api_key".into()),
        )
        .merge(
            Env::raw()
                .only(&[BESTSELLER_API_KEY_ENV])
                .map(|_| "bestseller.api_key".into()),
        )
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
