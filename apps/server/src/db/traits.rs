//! Store abstraction consumed by the search service and handlers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::search::{RestaurantFilter, SortField};
use crate::models::Restaurant;
use crate::Result;

/// Read-only access to the restaurant catalog.
///
/// The API never writes through this trait; persistence of records is owned
/// by the sibling onboarding service. Relevance queries require the full-text
/// index over name and cuisines that migration 0001 materializes.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Look up a single record by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>>;

    /// Count records matching the filter.
    async fn count(&self, filter: &RestaurantFilter) -> Result<i64>;

    /// Fetch a page of records matching the filter, ordered by `sort`
    /// descending.
    async fn find(
        &self,
        filter: &RestaurantFilter,
        sort: SortField,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Restaurant>>;

    /// Fetch a page of records matching the filter plus a full-text match on
    /// `text`, ordered by descending relevance score.
    async fn find_by_relevance(
        &self,
        filter: &RestaurantFilter,
        text: &str,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Restaurant>>;

    /// Count records matching the filter plus the full-text condition.
    async fn count_by_relevance(&self, filter: &RestaurantFilter, text: &str) -> Result<i64>;
}
