//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// `CustomerNotFound` is the only error the account service raises itself;
/// everything else is either a value-construction failure (`Validation`,
/// `InvalidId`) or an opaque pass-through from a repository implementation
/// (`Storage`). The service never wraps or translates repository failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed generator input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. IBAN parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No persisted customer record matches the given username.
    #[error("no customer with username `{username}`")]
    CustomerNotFound { username: String },

    /// Failure inside a repository implementation, passed through unchanged.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn customer_not_found(username: impl Into<String>) -> Self {
        Self::CustomerNotFound {
            username: username.into(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
