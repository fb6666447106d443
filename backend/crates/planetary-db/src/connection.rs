//! Pool construction and schema management.

use crate::{DbError, Result as DbErrorResult};

use planetary_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT_SECS: u64 = 5;

/// Tables removed by `drop_schema`, in drop order
const DROP_STATEMENTS: [&str; 3] = [
    "DROP TABLE IF EXISTS planets",
    "DROP TABLE IF EXISTS users",
    "DROP TABLE IF EXISTS _sqlx_migrations",
];

/// Open a pool on the database file at `path`
pub async fn connect(path: &Path, create_if_missing: bool) -> DbErrorResult<SqlitePool> {
    if create_if_missing
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DbError::Initialization {
            message: format!("cannot create {}: {}", parent.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(create_if_missing)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Open a private in-memory database.
///
/// Every SQLite connection to `:memory:` is a separate database, so the pool
/// is pinned to one connection that is never recycled.
pub async fn connect_in_memory() -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new().filename(":memory:");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the `users` and `planets` tables (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    MIGRATOR.run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

/// Drop both tables and the migration ledger
pub async fn drop_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    for statement in DROP_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema dropped");
    Ok(())
}
