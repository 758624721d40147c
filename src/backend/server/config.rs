/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is read
 * by the binary first), with defaults suitable for local development:
 *
 * | Variable | Default |
 * |----------|---------|
 * | `DATABASE_URL` | `sqlite://blog.db` |
 * | `SERVER_PORT` | `3000` |
 * | `JWT_SECRET` | development secret (logged as a warning) |
 * | `JWT_TTL_SECONDS` | 30 days (at most 10 years) |
 * | `USERNAME_CASE_SENSITIVE` | `true` |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` (4 to 31) |
 *
 * # Error Handling
 *
 * Unlike optional services, a malformed or out-of-range value is a startup error: the
 * server refuses to run with a configuration it cannot interpret.
 */

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::credentials::UsernameMatching;
use crate::backend::auth::sessions::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};
use crate::backend::error::BackendError;

const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Costs accepted by bcrypt
const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// In-memory SQLite URL
const MEMORY_URL: &str = "sqlite::memory:";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub username_matching: UsernameMatching,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://blog.db".to_string(),
            port: 3000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            username_matching: UsernameMatching::CaseSensitive,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET").filter(|secret| !secret.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                defaults.jwt_secret
            }
        };

        let case_sensitive = parse_or(&lookup, "USERNAME_CASE_SENSITIVE", true)?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            port: parse_or(&lookup, "SERVER_PORT", defaults.port)?,
            jwt_secret,
            token_ttl_secs: parse_in_range(
                &lookup,
                "JWT_TTL_SECONDS",
                defaults.token_ttl_secs,
                1..=MAX_TOKEN_TTL_SECS,
            )?,
            username_matching: UsernameMatching::from_case_sensitive(case_sensitive),
            bcrypt_cost: parse_in_range(&lookup, "BCRYPT_COST", defaults.bcrypt_cost, BCRYPT_COST_RANGE)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_in_range<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd,
{
    let value = parse_or(lookup, key, default)?;
    if range.contains(&value) {
        return Ok(value);
    }
    Err(ConfigError::InvalidValue {
        key,
        value: lookup(key).unwrap_or_default(),
    })
}

/// Open the SQLite pool for `database_url` and run migrations
///
/// The database file is created if it does not exist yet.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let mut pool_options = SqlitePoolOptions::new().max_connections(5);
    if database_url == MEMORY_URL {
        // The database lives and dies with its single connection
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Fresh migrated in-memory database
pub async fn connect_in_memory() -> Result<SqlitePool, BackendError> {
    load_database(MEMORY_URL).await
}
