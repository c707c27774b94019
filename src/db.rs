//! Database connection pool and migration management.

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool shared across handlers.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// Connections are created lazily and reused across HTTP requests.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server cannot
/// be reached.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// The migrations create the schema, the `transfer_funds` procedure, and the
/// audit and schema-change triggers. Each migration runs once; sqlx tracks
/// applied migrations in the `_sqlx_migrations` table.
///
/// # Errors
///
/// Returns an error if a migration file cannot be read or its SQL fails.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds the migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
