//! Unified application error types for Frescipe.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The fridge engine's business
//! rejections (`UnitMismatch`, `InsufficientQuantity`) and storage
//! collisions (`PersistenceConflict`) are distinct kinds so callers can
//! branch on them without parsing messages.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// The caller could not be identified.
    Unauthorized,
    /// A quantity operation used a unit different from the item's unit.
    UnitMismatch,
    /// A usage amount exceeds the remaining quantity.
    InsufficientQuantity,
    /// An ingredient could not be resolved in the catalog.
    IngredientUnresolved,
    /// A conditional write lost against a concurrent modification.
    PersistenceConflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl ErrorKind {
    /// Machine-readable code used in API payloads and logs.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnitMismatch => "UNIT_MISMATCH",
            Self::InsufficientQuantity => "INSUFFICIENT_QUANTITY",
            Self::IngredientUnresolved => "INGREDIENT_UNRESOLVED",
            Self::PersistenceConflict => "PERSISTENCE_CONFLICT",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::Internal => "INTERNAL",
        }
    }

    /// Whether the caller may retry the same request with refreshed state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceConflict)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// The unified application error used throughout Frescipe.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a unit mismatch error.
    pub fn unit_mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnitMismatch,
            format!("Unit mismatch: expected {expected}, got {actual}"),
        )
    }

    /// Create an insufficient quantity error.
    pub fn insufficient_quantity(requested: f64, available: f64) -> Self {
        Self::new(
            ErrorKind::InsufficientQuantity,
            format!("Insufficient quantity: requested {requested}, available {available}"),
        )
    }

    /// Create an ingredient-unresolved error.
    pub fn ingredient_unresolved(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IngredientUnresolved, message)
    }

    /// Create a persistence conflict error.
    pub fn persistence_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PersistenceConflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Check whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::Database, format!("Database error: {err}"), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = AppError::unit_mismatch("g", "kg");
        assert_eq!(err.to_string(), "UNIT_MISMATCH: Unit mismatch: expected g, got kg");
    }

    #[test]
    fn test_only_conflicts_are_retryable() {
        assert!(ErrorKind::PersistenceConflict.is_retryable());
        assert!(!ErrorKind::UnitMismatch.is_retryable());
        assert!(!ErrorKind::InsufficientQuantity.is_retryable());
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("disk");
        let err = AppError::with_source(ErrorKind::Internal, "boom", io);
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Internal);
    }
}
