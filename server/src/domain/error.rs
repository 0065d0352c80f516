//! Domain Layer - Errors
//!
//! Every failure an option list operation can surface to its caller.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The list name is not in the configured allow-list
    #[error("Unknown list: {0}")]
    InvalidListName(String),
    /// Missing or blank label/value
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The stored list could not be read or parsed
    #[error("Failed to read list {list}: {reason}")]
    StorageRead { list: String, reason: String },
    /// The list could not be written; the previous contents are untouched
    #[error("Failed to write list {list}: {reason}")]
    StorageWrite { list: String, reason: String },
}

impl DomainError {
    pub fn read(list: &str, reason: impl ToString) -> Self {
        DomainError::StorageRead {
            list: list.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(list: &str, reason: impl ToString) -> Self {
        DomainError::StorageWrite {
            list: list.to_string(),
            reason: reason.to_string(),
        }
    }
}
