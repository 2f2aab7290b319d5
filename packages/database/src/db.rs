//! Database connection utilities.

use std::path::Path;

use switchy_database::Database;
use switchy_database_connection::init_sqlite_rusqlite;

/// Default `SQLite` database file when `DATABASE_PATH` is not set.
pub const DEFAULT_DB_PATH: &str = "data/crime.db";

/// Opens the `SQLite` database named by the `DATABASE_PATH` environment
/// variable, falling back to [`DEFAULT_DB_PATH`].
///
/// Creates the parent directory if needed, but never the schema: the
/// `users` and `crimes` tables are managed externally.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database
/// cannot be opened.
pub async fn connect_from_env() -> Result<Box<dyn Database>, Box<dyn std::error::Error>> {
    let path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let path = Path::new(&path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = init_sqlite_rusqlite(Some(path))?;
    Ok(db)
}

/// Opens an in-memory `SQLite` database.
///
/// Used by tests that provision their own schema.
///
/// # Errors
///
/// Returns an error if the in-memory database cannot be initialized.
pub fn connect_in_memory() -> Result<Box<dyn Database>, Box<dyn std::error::Error>> {
    let db = init_sqlite_rusqlite(None)?;
    Ok(db)
}
