use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookfinder_core::{
    load_config, load_config_from_env, validate_config, BestsellerSource, BookCatalog, Config,
    GoogleBooksClient, NytClient,
};
use bookfinder_server::{api::create_router, state::AppState};

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "BOOKFINDER_CONFIG";

/// Config file used when present and `BOOKFINDER_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = resolve_config()?;

    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Catalog: {}", config.catalog.base_url);
    info!("Search debounce: {}ms", config.search.debounce_ms);

    let catalog: Arc<dyn BookCatalog> = Arc::new(
        GoogleBooksClient::new(&config.catalog).context("Failed to create catalog client")?,
    );
    if !config.catalog.credential().is_present() {
        info!("No catalog API key configured, using unkeyed quota");
    }

    let bestseller: Arc<dyn BestsellerSource> = Arc::new(
        NytClient::new(&config.bestseller).context("Failed to create bestseller client")?,
    );
    if bestseller.is_enabled() {
        info!("Bestseller lookups enabled");
    } else {
        info!("No bestseller API key configured, bestseller lookups disabled");
    }

    let state = Arc::new(AppState::new(config.clone(), catalog, bestseller));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Config file from `BOOKFINDER_CONFIG`, else `config.toml` if it exists,
/// else defaults plus environment.
fn resolve_config() -> Result<Config> {
    let config_path = match std::env::var(CONFIG_ENV) {
        Ok(path) => Some(PathBuf::from(path)),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Some(PathBuf::from(DEFAULT_CONFIG_PATH))
        }
        Err(_) => None,
    };

    match config_path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => {
            info!("No config file, using defaults and environment");
            load_config_from_env().context("Failed to load config from environment")
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
