//! Domain errors for the Clientele customer directory.

use thiserror::Error;

/// Domain-level errors surfaced by the repository layer.
///
/// Cache consistency problems after a successful store commit are not
/// errors: the durable write already happened, so they are logged as
/// warnings and the operation still reports success.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Store rejected {operation} for customer {id}: {rows} rows affected")]
    StoreRejected {
        operation: &'static str,
        id: String,
        rows: u64,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
