//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only record construction can fail. Once a record exists it is well-formed,
/// so filtering over records never produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a blank product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An external record (e.g. deserialized input) could not be turned into a product.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }
}
