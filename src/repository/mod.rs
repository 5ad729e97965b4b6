//! Repository layer for database operations.
//!
//! Query functions take a `&mut PgConnection` so the same code runs on a
//! pooled connection for reads and inside a transaction for writes.

pub mod books;
pub mod people;

use sqlx::{pool::PoolConnection, Pool, Postgres, Transaction};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Connection for read-only work
    pub async fn acquire(&self) -> AppResult<PoolConnection<Postgres>> {
        Ok(self.pool.acquire().await?)
    }

    /// Start a unit of work. Dropping the transaction without `commit` rolls it back.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        Ok(self.pool.begin().await?)
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
