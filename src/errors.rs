// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
///
/// The cursor, history and mapper components are total functions and never
/// produce these; the taxonomy exists for the domain layer callers build on
/// top (validation, lookups, serialization at the edges).
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Invalid operation
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Reason why the operation is invalid
        reason: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Not found error (generic)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic domain error
    #[error("Domain error: {0}")]
    Generic(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Create a generic domain error
    pub fn generic(msg: impl Into<String>) -> Self {
        DomainError::Generic(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::ValidationError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidOperation {
            reason: "cursor is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid operation: cursor is empty");

        let err = DomainError::validation("token must be 16 characters");
        assert_eq!(
            err.to_string(),
            "Validation error: token must be 16 characters"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: DomainError = bad.unwrap_err().into();
        assert!(matches!(err, DomainError::SerializationError(_)));
    }
}
