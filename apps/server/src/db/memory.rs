//! In-memory [`RestaurantStore`] implementation for tests and local
//! development without Postgres.
//!
//! Filter semantics mirror the SQL compilation in [`crate::db::search::sql`]:
//! case-insensitive exact city match, AND-across-cuisines substring match,
//! name-or-cuisine text disjunction. Relevance is approximated as a token
//! containment score (no stemming), which is deterministic but not identical
//! to Postgres `ts_rank` ordering.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::db::search::{RestaurantFilter, SortField};
use crate::db::traits::RestaurantStore;
use crate::models::Restaurant;
use crate::Result;

/// In-memory restaurant catalog behind an `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryRestaurantStore {
    restaurants: RwLock<Vec<Restaurant>>,
}

impl MemoryRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, enforcing the catalog invariants (non-empty name,
    /// city, country, image URL; non-negative numeric fields).
    pub fn insert(&self, restaurant: Restaurant) -> Result<Uuid> {
        restaurant
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid restaurant record: {e}"))?;
        let id = restaurant.id;
        self.restaurants
            .write()
            .expect("restaurant store lock poisoned")
            .push(restaurant);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.restaurants
            .read()
            .expect("restaurant store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn matching(&self, filter: &RestaurantFilter) -> Vec<Restaurant> {
        self.restaurants
            .read()
            .expect("restaurant store lock poisoned")
            .iter()
            .filter(|r| matches_filter(filter, r))
            .cloned()
            .collect()
    }
}

fn matches_filter(filter: &RestaurantFilter, restaurant: &Restaurant) -> bool {
    if let Some(city) = &filter.city {
        if !restaurant.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }

    for cuisine in &filter.cuisines {
        let wanted = cuisine.to_lowercase();
        let found = restaurant
            .cuisines
            .iter()
            .any(|c| c.to_lowercase().contains(&wanted));
        if !found {
            return false;
        }
    }

    if let Some(text) = &filter.text {
        let wanted = text.to_lowercase();
        let in_name = restaurant.name.to_lowercase().contains(&wanted);
        let in_cuisines = restaurant
            .cuisines
            .iter()
            .any(|c| c.to_lowercase().contains(&wanted));
        if !in_name && !in_cuisines {
            return false;
        }
    }

    true
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Token containment score over name + cuisines; `None` when some token is
/// missing (web-search queries AND their terms).
fn relevance_score(restaurant: &Restaurant, text: &str) -> Option<usize> {
    let haystack = format!(
        "{} {}",
        restaurant.name.to_lowercase(),
        restaurant.cuisines.join(" ").to_lowercase()
    );
    let mut score = 0;
    for token in tokens(text) {
        let occurrences = haystack.matches(&token).count();
        if occurrences == 0 {
            return None;
        }
        score += occurrences;
    }
    Some(score)
}

fn page<T>(mut items: Vec<T>, offset: u64, limit: u32) -> Vec<T> {
    let offset = offset.min(items.len() as u64) as usize;
    let mut out: Vec<T> = items.drain(offset..).collect();
    out.truncate(limit as usize);
    out
}

#[async_trait]
impl RestaurantStore for MemoryRestaurantStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>> {
        Ok(self
            .restaurants
            .read()
            .expect("restaurant store lock poisoned")
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn count(&self, filter: &RestaurantFilter) -> Result<i64> {
        Ok(self.matching(filter).len() as i64)
    }

    async fn find(
        &self,
        filter: &RestaurantFilter,
        sort: SortField,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Restaurant>> {
        let mut matched = self.matching(filter);
        match sort {
            SortField::LastUpdated => {
                matched.sort_by(|a, b| b.last_updated.cmp(&a.last_updated))
            }
            SortField::RestaurantName => matched.sort_by(|a, b| b.name.cmp(&a.name)),
            SortField::DeliveryPrice => {
                matched.sort_by(|a, b| b.delivery_price.cmp(&a.delivery_price))
            }
        }
        Ok(page(matched, offset, limit))
    }

    async fn find_by_relevance(
        &self,
        filter: &RestaurantFilter,
        text: &str,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Restaurant>> {
        let mut scored: Vec<(usize, Restaurant)> = self
            .matching(filter)
            .into_iter()
            .filter_map(|r| relevance_score(&r, text).map(|score| (score, r)))
            .collect();
        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| b.last_updated.cmp(&a.last_updated))
                .then_with(|| a.id.cmp(&b.id))
        });
        let restaurants = scored.into_iter().map(|(_, r)| r).collect();
        Ok(page(restaurants, offset, limit))
    }

    async fn count_by_relevance(&self, filter: &RestaurantFilter, text: &str) -> Result<i64> {
        Ok(self
            .matching(filter)
            .into_iter()
            .filter(|r| relevance_score(r, text).is_some())
            .count() as i64)
    }
}
