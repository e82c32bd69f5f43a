use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::domain::PostError;
use crate::storage::repositories::SqlitePostRepository;
use crate::storage::traits::Connection;

/// DbConnection owns the SQLite pool shared by every request
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection, creating the file if needed
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the database described by the configuration
    pub async fn init(config: &Config) -> Result<Self> {
        Self::new(&config.database_url, config.db_max_connections).await
    }

    /// Initialize a private in-memory database.
    ///
    /// The pool is pinned to a single connection that never expires, since
    /// an in-memory SQLite database disappears with its last connection.
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<std::time::Duration>)
            .max_lifetime(None::<std::time::Duration>)
            .connect("sqlite::memory:")
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps ids from being reused after a delete
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                post_id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Connection for DbConnection {
    type UnitOfWork = SqlitePostRepository;

    async fn begin(&self) -> Result<Self::UnitOfWork, PostError> {
        debug!("Beginning transaction");
        let tx = self.pool.begin().await?;
        Ok(SqlitePostRepository::new(tx))
    }

    async fn begin_write(&self) -> Result<Self::UnitOfWork, PostError> {
        debug!("Beginning write transaction");
        let mut tx = self.pool.begin().await?;

        // A write as the first statement takes the RESERVED lock while the
        // transaction holds no read lock, so a competing writer waits out
        // busy_timeout here. Upgrading a read lock later fails with
        // SQLITE_BUSY immediately instead.
        sqlx::query("UPDATE posts SET title = title WHERE 0")
            .execute(&mut *tx)
            .await?;

        Ok(SqlitePostRepository::new(tx))
    }
}
