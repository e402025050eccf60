//! # Error Types
//!
//! Structured error types for bpm_core. Every variant carries string payloads
//! so errors stay serializable and comparable when they cross the GUI or CLI
//! boundary.
//!
//! ## Example
//!
//! ```rust
//! use bpm_core::errors::{StoreError, StoreResult};
//!
//! fn validate_name(name: &str) -> StoreResult<()> {
//!     if name.is_empty() {
//!         return Err(StoreError::missing_field("name"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bpm_core operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Structured error type for storage operations.
///
/// Each variant provides specific context about what went wrong so callers
/// can react programmatically instead of string-matching messages.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StoreError {
    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The referenced record does not exist
    #[error("Record not found: {entity} id {id}")]
    NotFound { entity: String, id: i64 },

    /// Underlying SQLite error
    #[error("Database error: {reason}")]
    Database { reason: String },

    /// File I/O error (snapshot export, data directory creation)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl StoreError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        StoreError::MissingField {
            field: field.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StoreError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::MissingField { .. } => "MISSING_FIELD",
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::Database { .. } => "DATABASE_ERROR",
            StoreError::FileError { .. } => "FILE_ERROR",
            StoreError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = StoreError::missing_field("name");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: StoreError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::missing_field("name").error_code(), "MISSING_FIELD");
        assert_eq!(StoreError::not_found("project", 7).error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
