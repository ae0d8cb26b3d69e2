//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog requests (search, lookup by id)
//! - Bestseller lookups
//! - Search sessions (result sizes, discarded stale results)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// External Services
// =============================================================================

/// Catalog requests by operation and outcome.
pub static CATALOG_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "bookfinder_catalog_requests_total",
            "Total book catalog requests",
        ),
        // operation: "search", "get_by_id"
        // result: "ok", "empty", "skipped", "not_found",
        //         "network_error", "rate_limited", "request_failed"
        &["operation", "result"],
    )
    .unwrap()
});

/// Bestseller lookups by outcome.
pub static BESTSELLER_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "bookfinder_bestseller_lookups_total",
            "Total bestseller lookups",
        ),
        &["result"], // "matched", "unmatched", "disabled", "failed"
    )
    .unwrap()
});

/// External service call duration.
pub static EXTERNAL_SERVICE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "bookfinder_external_service_duration_seconds",
            "Duration of external service calls",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["service", "operation"], // service: "catalog", "bestseller"
    )
    .unwrap()
});

// =============================================================================
// Search Sessions
// =============================================================================

/// Books returned per search.
pub static SEARCH_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "bookfinder_search_results",
            "Number of books returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 20.0]),
    )
    .unwrap()
});

/// Search results dropped because the query changed while they were in flight.
pub static STALE_RESULTS_DISCARDED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "bookfinder_stale_results_discarded_total",
        "Search results discarded because a newer query superseded them",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_REQUESTS.clone()),
        Box::new(BESTSELLER_LOOKUPS.clone()),
        Box::new(EXTERNAL_SERVICE_DURATION.clone()),
        Box::new(SEARCH_RESULTS.clone()),
        Box::new(STALE_RESULTS_DISCARDED.clone()),
    ]
}
