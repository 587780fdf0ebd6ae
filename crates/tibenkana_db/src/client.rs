//! Database client for the booking store
//!
//! A thin wrapper around an sqlx `Any` pool so the same repository code runs
//! on SQLite and PostgreSQL.

use crate::error::DbError;
use sqlx::pool::PoolOptions;
use sqlx::Pool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tibenkana_config::{AppConfig, DatabaseConfig};
use tracing::{debug, error, info};

/// Database client for the booking store
#[derive(Debug, Clone)]
pub struct DbClient {
    /// The database connection pool
    pool: Pool<sqlx::Any>,
}

impl DbClient {
    /// Create a client from the `[database]` section of the app config.
    ///
    /// # Errors
    ///
    /// Fails when the section is missing, the URL is empty or the
    /// connection cannot be established.
    pub async fn new(config: &AppConfig) -> Result<Self, DbError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        Self::from_config(db_config).await
    }

    /// Create a client from a database configuration.
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        Self::from_url(&db_config.url).await
    }

    /// Create a client from a database URL, e.g. `sqlite://data/bookings.db`
    /// or `sqlite::memory:`.
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.trim().is_empty() {
            return Err(DbError::ConfigError("Database URL is empty".to_string()));
        }

        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, DbError> {
        debug!("Creating database pool with URL: {}", db_url);

        sqlx::any::install_default_drivers();

        let in_memory = db_url.contains(":memory:");
        let pool_options = if in_memory {
            // Every connection to :memory: opens its own empty database
            PoolOptions::<sqlx::Any>::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            PoolOptions::<sqlx::Any>::new()
                .max_connections(5)
                .idle_timeout(Duration::from_secs(600))
        }
        .acquire_timeout(Duration::from_secs(3));

        if !in_memory {
            if let Some(path) = sqlite_file_path(db_url) {
                ensure_sqlite_file(Path::new(path))?;
            }
        }

        let options = sqlx::any::AnyConnectOptions::from_str(db_url).map_err(|e| {
            DbError::ConfigError(format!("Invalid database URL '{}': {}", db_url, e))
        })?;

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            error!("Failed to create database pool: {}", e);
            DbError::PoolError(e.to_string())
        })?;

        info!("Database pool created successfully");
        Ok(pool)
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<sqlx::Any> {
        &self.pool
    }

    /// Execute a statement that returns no rows, returning the affected row count.
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }
}

impl std::fmt::Display for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbClient")
    }
}

/// The file path of a `sqlite:` URL, without query parameters.
fn sqlite_file_path(db_url: &str) -> Option<&str> {
    let rest = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty()).then_some(path)
}

/// SQLite only opens existing files through the `Any` driver, so create
/// the file and its directory up front.
fn ensure_sqlite_file(path: &Path) -> Result<(), DbError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            debug!("Creating directory for SQLite database: {:?}", dir);
            std::fs::create_dir_all(dir).map_err(|e| {
                DbError::PoolError(format!("Failed to create directory {:?}: {}", dir, e))
            })?;
        }
    }
    if !path.exists() {
        debug!("Creating empty SQLite database file: {:?}", path);
        std::fs::File::create(path).map_err(|e| {
            DbError::PoolError(format!("Failed to create database file {:?}: {}", path, e))
        })?;
    }
    Ok(())
}
