use thiserror::Error;

use crate::patient::ValidationError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store could not be reached or the connection was lost.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// The store rejected the data, e.g. a constraint violation.
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
