//! Tavola - restaurant catalog search API
//!
//! A read-only HTTP API over the restaurant catalog:
//! - Fetch-by-id with strict identifier validation
//! - Paginated, filterable city search with field-sort and free-text
//!   relevance modes

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
