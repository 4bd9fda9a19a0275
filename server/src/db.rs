use std::time::Duration;

use log::LevelFilter;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Lifetime and idle timeout for the single in-memory connection. The pool
/// must never recycle it: a replacement would open a fresh, empty database.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Open the connection pool for `url` and bring the schema up to date.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(url)).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// An in-memory SQLite database lives only as long as its connection, so the
/// pool is pinned to one connection that is never closed for age or idleness.
fn connect_options(url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging_level(LevelFilter::Debug);
    if url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(PINNED_CONNECTION_LIFETIME)
            .idle_timeout(PINNED_CONNECTION_LIFETIME);
    }
    options
}
