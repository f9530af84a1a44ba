//! Persistence layer for the spacefleet service.
//!
//! One [`DbPool`] fronts either PostgreSQL or SQLite through sqlx's `Any`
//! driver. All SQL in this crate sticks to the common subset of the two
//! dialects except for the DDL in [`schema`].

pub mod models;
pub mod repositories;
pub mod schema;

use std::time::Duration;

use sqlx::any::AnyPoolOptions;

pub type DbPool = sqlx::AnyPool;

/// Create a connection pool from a database URL.
///
/// In-memory SQLite databases live and die with their connection, so those
/// pools are pinned to a single connection that is never recycled.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let options = if is_in_memory(database_url) {
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
    };

    options.connect(database_url).await
}

/// Round-trip a trivial statement to verify the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite:")
        && (database_url.contains(":memory:") || database_url.contains("mode=memory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_sqlite_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://fleet?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://sample.db?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/fleet"));
    }
}
