//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::db::{PostgresRestaurantStore, RestaurantStore};
use crate::services::SearchService;

/// State shared by all request handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn RestaurantStore>,
    pub search: SearchService,
}

/// Knobs for [`AppState::new_with_options`]; `AppState::new` uses the
/// production defaults.
#[derive(Debug, Clone, Copy)]
pub struct AppStateOptions {
    pub run_migrations: bool,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            run_migrations: true,
        }
    }
}

impl AppState {
    /// Connect to Postgres, run migrations, and wire up the services.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_options(config, AppStateOptions::default()).await
    }

    pub async fn new_with_options(
        config: Config,
        options: AppStateOptions,
    ) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(config.database.pool_min_size)
            .max_connections(config.database.pool_max_size)
            .acquire_timeout(Duration::from_secs(config.database.pool_timeout_seconds))
            .connect(&config.database.url)
            .await
            .context("failed to connect to database")?;

        if options.run_migrations {
            // Creates the restaurants table and the derived indexes,
            // including the full-text index relevance mode depends on.
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("failed to run database migrations")?;
        }

        let store: Arc<dyn RestaurantStore> = Arc::new(PostgresRestaurantStore::new(pool));
        Ok(Self::with_store(config, store))
    }

    /// Build state around an already-constructed store.
    ///
    /// This is the seam tests (and Postgres-free local runs) use to inject
    /// [`crate::db::MemoryRestaurantStore`].
    pub fn with_store(config: Config, store: Arc<dyn RestaurantStore>) -> Self {
        let config = Arc::new(config);
        let search = SearchService::new(store.clone(), config.search.verbose_logging);
        Self {
            config,
            store,
            search,
        }
    }
}
