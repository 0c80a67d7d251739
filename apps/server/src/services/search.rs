//! Restaurant search orchestration.
//!
//! Translates sanitized [`SearchParameters`] into store queries and shapes
//! the paginated envelope. Malformed request input never reaches this layer;
//! the only failure source is the store itself.

use std::sync::Arc;

use crate::db::search::{RestaurantFilter, SearchParameters, SortOption, PAGE_SIZE};
use crate::db::traits::RestaurantStore;
use crate::models::{Pagination, SearchPage};
use crate::Result;

/// The search engine behind `GET /api/restaurant/search/{city}`.
#[derive(Clone)]
pub struct SearchService {
    store: Arc<dyn RestaurantStore>,
    verbose_logging: bool,
}

impl SearchService {
    /// `verbose_logging` gates a per-query diagnostic log line; it never
    /// changes behavior.
    pub fn new(store: Arc<dyn RestaurantStore>, verbose_logging: bool) -> Self {
        Self {
            store,
            verbose_logging,
        }
    }

    /// Run one search request.
    ///
    /// Mode selection:
    /// - `sortOption=bestMatch` with a non-empty text query runs in relevance
    ///   mode (full-text match, ranked by score).
    /// - everything else runs in field-sort mode, descending on the
    ///   sanitized sort field.
    ///
    /// The requested page is never clamped: asking for a page past the end
    /// returns an empty `data` array with accurate `total`/`pages`.
    pub async fn search(&self, params: &SearchParameters) -> Result<SearchPage> {
        // Count the city scope alone first. When a city has no restaurants at
        // all we can answer without building the cuisine/text clauses, which
        // are the expensive part of the query.
        let base = RestaurantFilter::city_only(params);
        let in_city = self.store.count(&base).await?;
        if in_city == 0 {
            crate::metrics::SEARCH_QUERIES_TOTAL
                .with_label_values(&["early_exit"])
                .inc();
            if self.verbose_logging {
                tracing::debug!(city = %params.city, "search short-circuited: no restaurants in city");
            }
            return Ok(SearchPage::empty());
        }

        let filter = RestaurantFilter::from_params(params);
        let offset = u64::from(params.page - 1) * u64::from(PAGE_SIZE);

        let relevance = params.sort == SortOption::BestMatch && !params.text.is_empty();
        let (data, total) = if relevance {
            let data = self
                .store
                .find_by_relevance(&filter, &params.text, offset, PAGE_SIZE)
                .await?;
            let total = self.store.count_by_relevance(&filter, &params.text).await?;
            (data, total)
        } else {
            let data = self
                .store
                .find(&filter, params.sort.field(), offset, PAGE_SIZE)
                .await?;
            let total = self.store.count(&filter).await?;
            (data, total)
        };

        let mode = if relevance { "relevance" } else { "field" };
        crate::metrics::SEARCH_QUERIES_TOTAL
            .with_label_values(&[mode])
            .inc();
        crate::metrics::SEARCH_RESULTS
            .with_label_values(&[mode])
            .observe(data.len() as f64);

        if self.verbose_logging {
            tracing::debug!(
                city = %params.city,
                text = %params.text,
                cuisines = ?filter.cuisines,
                sort = ?params.sort,
                mode,
                page = params.page,
                page_size = PAGE_SIZE,
                returned = data.len(),
                total,
                "search completed"
            );
        }

        Ok(SearchPage {
            data,
            pagination: Pagination {
                total,
                page: params.page,
                pages: page_count(total),
            },
        })
    }
}

/// `max(1, ceil(total / PAGE_SIZE))`.
fn page_count(total: i64) -> u32 {
    let size = i64::from(PAGE_SIZE);
    ((total + size - 1) / size).max(1) as u32
}
