//! Test harness: an in-process router over the in-memory store.

use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tavola::{
    api::create_router,
    db::MemoryRestaurantStore,
    models::{MenuItem, Restaurant},
    AppState, Config,
};
use tower::ServiceExt as _;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryRestaurantStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::new_with_config(|_| {})
    }

    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let store = Arc::new(MemoryRestaurantStore::new());
        let state = AppState::with_store(config, store.clone());

        Self {
            router: create_router(state),
            store,
        }
    }

    pub async fn get(
        &self,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path_and_query)
            .header("host", "example.org")
            .body(Body::empty())
            .context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).context("parse response body")?
        };

        Ok((status, json))
    }
}

/// Fixture time so ordering assertions are deterministic.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub struct RestaurantBuilder {
    restaurant: Restaurant,
}

impl RestaurantBuilder {
    pub fn new(name: &str, city: &str) -> Self {
        Self {
            restaurant: Restaurant {
                id: Uuid::new_v4(),
                owner_id: Uuid::new_v4(),
                name: name.to_string(),
                city: city.to_string(),
                country: "United Kingdom".to_string(),
                delivery_price: Decimal::new(350, 2),
                estimated_delivery_time: 30,
                cuisines: vec!["International".to_string()],
                menu_items: vec![MenuItem {
                    id: Uuid::new_v4(),
                    name: "House Special".to_string(),
                    price: Decimal::new(1200, 2),
                }],
                image_url: "https://cdn.example.org/placeholder.png".to_string(),
                last_updated: base_time(),
            },
        }
    }

    pub fn cuisines(mut self, cuisines: &[&str]) -> Self {
        self.restaurant.cuisines = cuisines.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn delivery_price(mut self, price: &str) -> Self {
        self.restaurant.delivery_price = price.parse().expect("fixture delivery price");
        self
    }

    pub fn updated_minutes_ago(mut self, minutes: i64) -> Self {
        self.restaurant.last_updated = base_time() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Restaurant {
        self.restaurant
    }
}

pub fn seed(app: &TestApp, builder: RestaurantBuilder) -> anyhow::Result<Uuid> {
    Ok(app.store.insert(builder.build())?)
}

pub fn result_names(body: &serde_json::Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|data| {
            data.iter()
                .filter_map(|r| r["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

pub fn assert_pagination(body: &serde_json::Value, total: i64, page: i64, pages: i64) {
    assert_eq!(body["pagination"]["total"], serde_json::json!(total), "total");
    assert_eq!(body["pagination"]["page"], serde_json::json!(page), "page");
    assert_eq!(body["pagination"]["pages"], serde_json::json!(pages), "pages");
}
