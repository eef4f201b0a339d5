// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use shoplist_core::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything needed to open the store handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Private in-memory store. One connection, since every SQLite
    /// connection would otherwise see its own empty database.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:").with_max_connections(1)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

/// Create SQLite connection pool with WAL mode
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(map_sqlx_error)?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    Ok(pool)
}

/// Owned store handle with an explicit lifecycle: acquired by
/// [`Database::connect`], released by [`Database::close`].
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = create_pool(config).await?;
        info!(max_connections = config.max_connections, "Database pool opened");
        Ok(Self { pool })
    }

    /// Handle to pass into repositories. Cloning shares the same pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close them all
    pub async fn close(self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Run `work` against a freshly opened pool and close the pool afterwards,
/// whether `work` succeeded or not
pub async fn with_database<F, Fut, T>(config: &DatabaseConfig, work: F) -> Result<T>
where
    F: FnOnce(SqlitePool) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let database = Database::connect(config).await?;
    let outcome = work(database.pool().clone()).await;
    database.close().await;
    outcome
}
