//! Custom error types for carrito
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Note that rejected domain input (blank item name, non-positive quantity or
//! price) and unknown ids on toggle/remove are NOT errors: the domain logic
//! treats them as no-ops and returns the snapshot unchanged. Only the
//! repository boundary (validation at create, storage failures) uses this
//! error type.

use thiserror::Error;

/// The main error type for carrito operations
#[derive(Error, Debug)]
pub enum CarritoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors (backing store unavailable or unwritable)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CarritoError {
    /// Create a "not found" error for lists
    pub fn list_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "List",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for items
    pub fn item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CarritoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CarritoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for carrito operations
pub type CarritoResult<T> = Result<T, CarritoError>;
