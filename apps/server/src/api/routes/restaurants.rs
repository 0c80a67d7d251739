//! Restaurant API Routes
//!
//! - `GET /{id}` - fetch a single restaurant by id
//! - `GET /search/{city}` - paginated, filterable search within a city

use axum::{routing::get, Router};

use crate::api::handlers::restaurants;
use crate::state::AppState;

pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(restaurants::get_restaurant))
        .route("/search/:city", get(restaurants::search_restaurants))
}
