#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `SQLite` complaint store for the complaint map.
//!
//! The dashboard only reads complaints; the insert path exists for the
//! CLI's `seed` command and for tests. Uses `switchy_database` for all
//! database operations.

pub mod queries;

use std::path::{Path, PathBuf};

use switchy_database::Database;
use switchy_database_connection::init_sqlite_rusqlite;
use thiserror::Error;

/// Default path for the complaints database.
pub const DEFAULT_DB_PATH: &str = "data/complaints.db";

/// Environment variable overriding [`DEFAULT_DB_PATH`].
pub const DB_PATH_ENV_VAR: &str = "COMPLAINTS_DB_PATH";

/// Errors from complaint store operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// A database query or command failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be converted.
    #[error("Data conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

impl From<switchy_database::DatabaseError> for DbError {
    fn from(e: switchy_database::DatabaseError) -> Self {
        Self::Database(e.to_string())
    }
}

/// Resolves the database path from [`DB_PATH_ENV_VAR`], falling back to
/// [`DEFAULT_DB_PATH`].
#[must_use]
pub fn db_path_from_env() -> PathBuf {
    std::env::var(DB_PATH_ENV_VAR)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from)
}

/// Opens (or creates) the complaints `SQLite` database and ensures the
/// schema exists.
///
/// # Errors
///
/// Returns [`DbError`] if the database cannot be opened or schema
/// creation fails.
pub async fn open_db(path: &Path) -> Result<Box<dyn Database>, DbError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    log::debug!("Opening complaints database at {}", path.display());

    let db = init_sqlite_rusqlite(Some(path)).map_err(|e| DbError::Database(e.to_string()))?;

    ensure_schema(db.as_ref()).await?;

    Ok(db)
}

/// Creates the `complaints` table if it doesn't already exist.
async fn ensure_schema(db: &dyn Database) -> Result<(), DbError> {
    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS complaints (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            lat         REAL NOT NULL,
            lon         REAL NOT NULL,
            issue_type  TEXT,
            intensity   INTEGER,
            description TEXT,
            timestamp   TEXT NOT NULL
        )",
    )
    .await?;

    db.exec_raw(
        "CREATE INDEX IF NOT EXISTS idx_complaints_timestamp
         ON complaints (timestamp)",
    )
    .await?;

    Ok(())
}
