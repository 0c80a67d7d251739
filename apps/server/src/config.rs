//! Configuration loading and validation.
//!
//! Layered sources, later entries winning:
//! 1. `config/default.toml`
//! 2. `config/{APP_ENVIRONMENT}.toml` (e.g. `config/production.toml`)
//! 3. Environment variables prefixed `APP`, `__`-separated
//!    (e.g. `APP__DATABASE__URL`).
//!
//! A `.env` file is loaded first via dotenvy when present.

use std::net::SocketAddr;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means no CORS headers are emitted.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_min_size: u32,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for the service's own crates (`RUST_LOG` overrides).
    pub level: String,
    /// Emit JSON logs instead of the human-readable format.
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    pub file_rotation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Emit a per-query diagnostic debug log (query shape, mode, counts).
    pub verbose_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_min_size: 1,
            pool_max_size: 10,
            pool_timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "restaurant-server".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            verbose_logging: false,
        }
    }
}

const FILE_ROTATIONS: &[&str] = &["daily", "hourly", "minutely", "never"];

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{environment}")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .context("failed to assemble configuration sources")?;

        config
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    /// Validate settings that would otherwise fail at an awkward time.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.database.url.is_empty() {
            return Err("database.url must be set".to_string());
        }
        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be at least 1".to_string());
        }
        if self.database.pool_min_size > self.database.pool_max_size {
            return Err("database.pool_min_size must not exceed pool_max_size".to_string());
        }
        if !FILE_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation must be one of {FILE_ROTATIONS:?}"
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid listen address {}:{}",
                    self.server.host, self.server.port
                )
            })
    }
}
