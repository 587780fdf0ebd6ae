//! Error types for the booking storage

use thiserror::Error;
use tibenkana_common::TibenkanaError;

/// Errors that can occur when working with booking storage
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A stored row could not be turned back into a booking
    #[error("Corrupt booking row: {0}")]
    DecodeError(String),

    /// A booking with this id is already stored
    #[error("Booking {0} already exists")]
    Conflict(String),
}

impl From<DbError> for TibenkanaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(msg) => TibenkanaError::Config(msg),
            other => TibenkanaError::Persistence(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tibenkana_common::HttpStatusCode;

    #[test]
    fn conflict_is_a_persistence_failure() {
        let err: TibenkanaError = DbError::Conflict("BT-000001".into()).into();
        assert!(matches!(err, TibenkanaError::Persistence(ref m) if m.contains("BT-000001")));
        assert_eq!(err.status_code(), 500);
    }
}
