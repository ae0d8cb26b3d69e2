//! Request metrics for every route.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::warn;

use crate::metrics::{
    normalize_path, HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION,
    UPSTREAM_ERRORS_TOTAL,
};

/// Keeps the in-flight gauge balanced even when the client goes away mid-request.
struct InFlight;

impl InFlight {
    fn enter() -> Self {
        HTTP_REQUESTS_IN_FLIGHT.inc();
        Self
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        HTTP_REQUESTS_IN_FLIGHT.dec();
    }
}

/// Upstream failure a book route passed on to the client, if any.
fn upstream_reason(path: &str, status: StatusCode) -> Option<&'static str> {
    if !path.starts_with("/api/v1/books") {
        return None;
    }
    match status {
        StatusCode::TOO_MANY_REQUESTS => Some("rate_limited"),
        StatusCode::BAD_GATEWAY => Some("upstream_failed"),
        _ => None,
    }
}

/// Records duration and count per route and status, and counts catalog
/// failures surfaced to clients.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());

    let response = {
        let _in_flight = InFlight::enter();
        next.run(request).await
    };

    let status = response.status();
    let status_label = status.as_u16().to_string();
    let labels = [method.as_str(), path.as_str(), status_label.as_str()];

    HTTP_REQUEST_DURATION
        .with_label_values(&labels)
        .observe(start.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL.with_label_values(&labels).inc();

    if let Some(reason) = upstream_reason(&path, status) {
        warn!(path = %path, status = %status, "Catalog failure returned to client");
        UPSTREAM_ERRORS_TOTAL
            .with_label_values(&[path.as_str(), reason])
            .inc();
    }

    response
}
