//! Postgres-backed restaurant store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::search::sql::{self, BindValue};
use crate::db::search::{RestaurantFilter, SortField};
use crate::db::traits::RestaurantStore;
use crate::models::Restaurant;
use crate::Result;

/// Restaurant catalog stored in Postgres.
///
/// Filters are compiled to parameterized SQL by [`crate::db::search::sql`];
/// this type only executes the compiled query and maps rows.
#[derive(Debug, Clone)]
pub struct PostgresRestaurantStore {
    pool: PgPool,
}

impl PostgresRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_page(&self, sql: String, binds: Vec<BindValue>) -> Result<Vec<Restaurant>> {
        let mut query = sqlx::query_as::<_, Restaurant>(&sql);
        for value in binds {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::Int(v) => query.bind(v),
            };
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(crate::Error::Database)?;
        Ok(rows)
    }

    async fn fetch_count(&self, sql: String, binds: Vec<BindValue>) -> Result<i64> {
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in binds {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::Int(v) => query.bind(v),
            };
        }
        let total = query
            .fetch_one(&self.pool)
            .await
            .map_err(crate::Error::Database)?;
        Ok(total)
    }
}

#[async_trait]
impl RestaurantStore for PostgresRestaurantStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, owner_id, name, city, country, delivery_price, \
             estimated_delivery_time, cuisines, menu_items, image_url, last_updated \
             FROM restaurants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(crate::Error::Database)?;
        Ok(restaurant)
    }

    async fn count(&self, filter: &RestaurantFilter) -> Result<i64> {
        let (sql, binds) = sql::build_count(filter);
        self.fetch_count(sql, binds).await
    }

    async fn find(
        &self,
        filter: &RestaurantFilter,
        sort: SortField,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Restaurant>> {
        let (sql, binds) = sql::build_select(filter, sort, offset, limit);
        self.fetch_page(sql, binds).await
    }

    async fn find_by_relevance(
        &self,
        filter: &RestaurantFilter,
        text: &str,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Restaurant>> {
        let (sql, binds) = sql::build_relevance_select(filter, text, offset, limit);
        self.fetch_page(sql, binds).await
    }

    async fn count_by_relevance(&self, filter: &RestaurantFilter, text: &str) -> Result<i64> {
        let (sql, binds) = sql::build_relevance_count(filter, text);
        self.fetch_count(sql, binds).await
    }
}
