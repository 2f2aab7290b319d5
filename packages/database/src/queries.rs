//! Query functions for the credential and prediction tables.
//!
//! Both tables are externally provisioned:
//!
//! ```sql
//! CREATE TABLE users (username TEXT, password TEXT);
//! CREATE TABLE crimes (
//!     crime_type TEXT, location TEXT,
//!     year INTEGER, month INTEGER, day INTEGER,
//!     hour INTEGER, minute INTEGER
//! );
//! ```

use switchy_database::{Database, DatabaseValue};

use crate::DbError;

/// Checks whether a username/password pair exists in the `users` table.
///
/// Exact match on both columns; passwords are stored verbatim (no hashing
/// anywhere in this system).
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
pub async fn verify_credentials(
    db: &dyn Database,
    username: &str,
    password: &str,
) -> Result<bool, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT * FROM users WHERE username = $1 AND password = $2",
            &[
                DatabaseValue::String(username.to_string()),
                DatabaseValue::String(password.to_string()),
            ],
        )
        .await?;

    Ok(!rows.is_empty())
}

/// Appends one resolved prediction, with its original context fields, to
/// the `crimes` table.
///
/// Pure insert, committed immediately; rows are never updated or deleted
/// by this system.
///
/// # Errors
///
/// Returns [`DbError`] if the database operation fails.
#[allow(clippy::too_many_arguments)]
pub async fn insert_prediction(
    db: &dyn Database,
    crime_type: &str,
    location: &str,
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
) -> Result<(), DbError> {
    db.exec_raw_params(
        "INSERT INTO crimes (crime_type, location, year, month, day, hour, minute)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
        &[
            DatabaseValue::String(crime_type.to_string()),
            DatabaseValue::String(location.to_string()),
            DatabaseValue::Int64(year),
            DatabaseValue::Int64(month),
            DatabaseValue::Int64(day),
            DatabaseValue::Int64(hour),
            DatabaseValue::Int64(minute),
        ],
    )
    .await?;

    Ok(())
}
