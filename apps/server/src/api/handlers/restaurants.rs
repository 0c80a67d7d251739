//! Restaurant read and search handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::search::SearchParameters;
use crate::models::{Restaurant, SearchPage};
use crate::state::AppState;
use crate::{Error, Result};

/// Fetch a single restaurant by id.
///
/// A malformed id is a client error (400), distinct from a well-formed id
/// with no record (404).
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Restaurant>> {
    let raw = id.trim();
    let id = Uuid::parse_str(raw).map_err(|_| Error::InvalidRestaurantId(raw.to_string()))?;

    let restaurant = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(Error::RestaurantNotFound(id))?;

    Ok(Json(restaurant))
}

/// Raw search query parameters. All optional; `page` arrives as text and is
/// coerced downstream, like every other field.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQueryParams {
    search_query: String,
    selected_cuisines: String,
    sort_option: String,
    page: String,
}

impl Default for SearchQueryParams {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_cuisines: String::new(),
            sort_option: "lastUpdated".to_string(),
            page: "1".to_string(),
        }
    }
}

/// Search restaurants within a city.
///
/// Malformed `sortOption`/`page` values are not errors; they coerce to
/// defaults inside [`SearchParameters`].
pub async fn search_restaurants(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(query): Query<SearchQueryParams>,
) -> Result<Json<SearchPage>> {
    let params = SearchParameters::from_request(
        &city,
        &query.search_query,
        &query.selected_cuisines,
        &query.sort_option,
        &query.page,
    );

    let page = state.search.search(&params).await?;
    Ok(Json(page))
}
