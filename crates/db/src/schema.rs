//! Table creation for both supported dialects.
//!
//! There is no migration history: the schema is small enough that startup
//! creates whatever is missing and `GET /sync` rebuilds it from scratch.

use sqlx::Connection;

use crate::DbPool;

/// How [`sync`] treats tables that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Create missing tables and leave existing data alone.
    CreateMissing,
    /// Drop both tables (children first) and create them empty.
    Recreate,
}

/// SQL dialect behind an `Any` connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    /// Map sqlx's backend name to a dialect.
    pub fn from_backend_name(name: &str) -> Option<Self> {
        match name {
            "PostgreSQL" => Some(Dialect::Postgres),
            "SQLite" => Some(Dialect::Sqlite),
            _ => None,
        }
    }

    fn create_statements(self) -> &'static [&'static str] {
        match self {
            Dialect::Postgres => &[
                "CREATE TABLE IF NOT EXISTS spacecrafts (
                    id BIGSERIAL PRIMARY KEY,
                    name TEXT NOT NULL,
                    max_speed DOUBLE PRECISION NOT NULL,
                    mass DOUBLE PRECISION NOT NULL
                )",
                "CREATE TABLE IF NOT EXISTS astronauts (
                    id BIGSERIAL PRIMARY KEY,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    spacecraft_id BIGINT REFERENCES spacecrafts (id)
                        ON DELETE SET NULL ON UPDATE CASCADE
                )",
                "CREATE INDEX IF NOT EXISTS idx_astronauts_spacecraft_id
                    ON astronauts (spacecraft_id)",
            ],
            Dialect::Sqlite => &[
                "CREATE TABLE IF NOT EXISTS spacecrafts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    max_speed REAL NOT NULL,
                    mass REAL NOT NULL
                )",
                "CREATE TABLE IF NOT EXISTS astronauts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    spacecraft_id INTEGER REFERENCES spacecrafts (id)
                        ON DELETE SET NULL ON UPDATE CASCADE
                )",
                "CREATE INDEX IF NOT EXISTS idx_astronauts_spacecraft_id
                    ON astronauts (spacecraft_id)",
            ],
        }
    }
}

const DROP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS astronauts",
    "DROP TABLE IF EXISTS spacecrafts",
];

/// Bring the schema in line with `mode`.
///
/// Every statement runs inside one transaction on a single connection, so an
/// in-memory SQLite database sees all of them and a failed `Recreate` leaves
/// the old tables in place.
pub async fn sync(pool: &DbPool, mode: SyncMode) -> Result<Dialect, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let backend = conn.backend_name().to_string();
    let dialect = Dialect::from_backend_name(&backend).ok_or_else(|| {
        sqlx::Error::Configuration(format!("unsupported database backend: {backend}").into())
    })?;

    let mut tx = conn.begin().await?;
    if mode == SyncMode::Recreate {
        for statement in DROP_STATEMENTS {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
    }
    for statement in dialect.create_statements() {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(?dialect, ?mode, "Schema synchronised");
    Ok(dialect)
}
