//! Error types for sv-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// A version row could not be decoded (D003)
    #[error("[D003] Invalid schema version row: {0}")]
    InvalidVersionRow(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                DbError::ConnectionError(err.to_string())
            }
            _ => DbError::ExecutionError(err.to_string()),
        }
    }
}
