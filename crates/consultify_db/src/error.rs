//! Error types for the database client

use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A uniqueness constraint rejected the write (e.g. slot already booked)
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A stored value could not be decoded into its domain type
    #[error("Database decode error: {0}")]
    DecodeError(String),
}

impl DbError {
    /// Classifies a query failure, separating uniqueness violations from
    /// other errors so callers can map them to a conflict response.
    pub fn from_query_error(err: sqlx::Error, context: &str) -> Self {
        let message = err.to_string();
        // SQLite reports "UNIQUE constraint failed", PostgreSQL "duplicate key
        // value violates unique constraint".
        if message.contains("UNIQUE constraint") || message.contains("duplicate key") {
            DbError::UniqueViolation(context.to_string())
        } else {
            DbError::QueryError(message)
        }
    }
}
