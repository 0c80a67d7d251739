//! Metrics API Routes
//!
//! Exposes Prometheus-compatible metrics endpoint for monitoring

use axum::{routing::get, Router};

use crate::api::handlers::metrics;
use crate::state::AppState;

pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics::metrics_handler))
}
