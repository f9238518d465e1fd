//! Database connection pool management
//!
//! Every command opens one pool, runs its statements one after another,
//! and closes the pool before exiting.

use std::future::Future;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

/// Default maximum connections for the pool.
/// Commands never have more than one statement in flight.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run `body` against a fresh pool and close the pool afterwards,
/// whether `body` succeeded or not.
pub async fn with_pool<T, E, F, Fut>(
    database_url: &str,
    max_connections: u32,
    body: F,
) -> Result<T, E>
where
    E: From<sqlx::Error>,
    F: FnOnce(PgPool) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let pool = create_pool(database_url, max_connections).await?;
    let result = body(pool.clone()).await;

    pool.close().await;
    debug!("connection pool closed");

    result
}
