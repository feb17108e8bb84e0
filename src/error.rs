//! Custom error types for the cashflow engine
//!
//! The engine itself never fails: scheduling problems degrade to warnings.
//! These errors cover the boundary around it (reading profiles, settings and
//! validating input before a run) and are defined with thiserror.

use thiserror::Error;

/// The main error type for cashflow operations
#[derive(Error, Debug)]
pub enum CashflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Profile validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Profile file could not be loaded or written
    #[error("Profile error: {0}")]
    Profile(String),
}

impl CashflowError {
    /// Create a validation error for a named field
    pub fn invalid_field(entity: &str, field: &str, reason: impl Into<String>) -> Self {
        Self::Validation(format!("{} {}: {}", entity, field, reason.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for CashflowError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for cashflow operations
pub type CashflowResult<T> = Result<T, CashflowError>;
