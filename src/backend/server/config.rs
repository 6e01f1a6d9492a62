/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the configured store.
 *
 * # Configuration Sources
 *
 * | Variable                   | Required | Default              |
 * |----------------------------|----------|----------------------|
 * | `JWT_SECRET`               | yes      |                      |
 * | `DATABASE_URL`             | no       | in-memory store      |
 * | `DATABASE_MAX_CONNECTIONS` | no       | 5                    |
 * | `JWT_TTL_SECS`             | no       | tokens never expire (max ten years) |
 * | `BCRYPT_COST`              | no       | `bcrypt::DEFAULT_COST` |
 * | `SERVER_PORT`              | no       | 3000                 |
 *
 * # Error Handling
 *
 * A missing secret or an unparsable value is a `ConfigError` and stops
 * startup. Database problems do not: the server logs them and continues
 * with the in-memory store.
 */

use sqlx::postgres::PgPoolOptions;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::backend::store::{MemoryStore, PgStore, SharedStore};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Upper bound for `JWT_TTL_SECS` (ten years)
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: Option<Duration>,
    pub bcrypt_cost: u32,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

fn parse<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    value
        .map(|raw| match raw.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidValue { key, value: raw }),
        })
        .transpose()
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let port = parse("SERVER_PORT", lookup("SERVER_PORT"))?.unwrap_or(DEFAULT_PORT);

        let token_ttl_secs = parse::<u64>("JWT_TTL_SECS", lookup("JWT_TTL_SECS"))?;
        if let Some(secs) = token_ttl_secs.filter(|secs| *secs > MAX_TOKEN_TTL_SECS) {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_SECS",
                value: secs.to_string(),
            });
        }
        let token_ttl = token_ttl_secs.map(Duration::from_secs);

        let bcrypt_cost = parse("BCRYPT_COST", lookup("BCRYPT_COST"))?
            .unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());
        let max_connections = parse("DATABASE_MAX_CONNECTIONS", lookup("DATABASE_MAX_CONNECTIONS"))?
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            port,
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            database_url,
            max_connections,
        })
    }
}

/// Open the configured store
///
/// This function:
/// 1. Connects to `database_url` if one is configured
/// 2. Runs database migrations
/// 3. Falls back to `MemoryStore` if either step fails or no URL is set
pub async fn load_store(config: &ServerConfig) -> SharedStore {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
        return Arc::new(MemoryStore::new());
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Using in-memory store; data will not persist.");
            return Arc::new(MemoryStore::new());
        }
    };

    let store = PgStore::new(pool);

    tracing::info!("Running database migrations...");
    if let Err(e) = store.migrate().await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Using in-memory store; data will not persist.");
        return Arc::new(MemoryStore::new());
    }

    tracing::info!("Database ready");
    Arc::new(store)
}
