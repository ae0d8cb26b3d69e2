use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::Credential;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub bestseller: BestsellerConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Book catalog API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// API root, without the `/volumes` path.
    #[serde(default = "default_catalog_url")]
    pub base_url: String,
    /// Optional API key; the catalog also answers unkeyed requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl CatalogConfig {
    pub fn credential(&self) -> Credential {
        Credential::from_option(self.api_key.as_deref())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_catalog_url() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

/// Bestseller list API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BestsellerConfig {
    #[serde(default = "default_bestseller_url")]
    pub base_url: String,
    /// Without a key the bestseller lookup is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl BestsellerConfig {
    pub fn credential(&self) -> Credential {
        Credential::from_option(self.api_key.as_deref())
    }
}

impl Default for BestsellerConfig {
    fn default() -> Self {
        Self {
            base_url: default_bestseller_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_bestseller_url() -> String {
    "https://api.nytimes.com/svc/books/v3".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Search-as-you-type configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiet period after the last edit before a search is sent.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    400
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedServiceConfig,
    pub bestseller: SanitizedServiceConfig,
    pub search: SearchConfig,
}

/// Sanitized upstream service config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedServiceConfig {
    pub base_url: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedServiceConfig {
                base_url: config.catalog.base_url.clone(),
                api_key_configured: config.catalog.credential().is_present(),
                timeout_secs: config.catalog.timeout_secs,
            },
            bestseller: SanitizedServiceConfig {
                base_url: config.bestseller.base_url.clone(),
                api_key_configured: config.bestseller.credential().is_present(),
                timeout_secs: config.bestseller.timeout_secs,
            },
            search: config.search.clone(),
        }
    }
}
