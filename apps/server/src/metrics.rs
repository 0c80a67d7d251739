//! Metrics collection for the restaurant API
//!
//! Defines the Prometheus metrics exposed on `/metrics`.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, HistogramVec,
    IntCounterVec, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "restaurant_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "restaurant_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "restaurant_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Search Metrics

    /// Search queries by mode (field, relevance, early_exit)
    pub static ref SEARCH_QUERIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "restaurant_search_queries_total",
        "Total number of restaurant search queries",
        &["mode"]
    )
    .expect("Failed to register SEARCH_QUERIES_TOTAL");

    /// Restaurants returned per search page
    pub static ref SEARCH_RESULTS: HistogramVec = register_histogram_vec!(
        "restaurant_search_results",
        "Number of restaurants returned by a search page",
        &["mode"],
        vec![0.0, 1.0, 2.0, 5.0, 10.0]
    )
    .expect("Failed to register SEARCH_RESULTS");
}

/// Sanitize a request path for metrics labels (replace ids, limit cardinality).
pub fn sanitize_path(path: &str) -> String {
    let Some(rest) = path.strip_prefix("/api/restaurant") else {
        // Operational endpoints (/, /health, /metrics) are a closed set.
        return path.to_string();
    };

    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => "/api/restaurant".to_string(),
        ["search", ..] => "/api/restaurant/search/{city}".to_string(),
        _ => "/api/restaurant/{id}".to_string(),
    }
}
