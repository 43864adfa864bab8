//! Database connection pool
//!
//! One pool is created at startup, before any request is served. Every
//! store operation checks a single connection out for its own scoped use
//! and returns it to the pool on drop.

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use super::repos::DbError;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails; callers treat this as a
/// fatal startup error.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Check out one connection for a single operation.
///
/// Acquisition failure is reported as a distinct `DbError::Unavailable`.
/// The connection goes back to the pool when the guard drops, on success
/// and failure paths alike.
pub async fn acquire(pool: &PgPool) -> Result<PoolConnection<Postgres>, DbError> {
    pool.acquire().await.map_err(DbError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let mut conn = acquire(&pool).await.expect("acquire failed");
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn unreachable_database_is_unavailable() {
        // Port 1 refuses immediately; no server required.
        let result = create_pool("postgres://localhost:1/nodb").await;
        assert!(result.is_err());
    }
}
