//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A required form field is missing or invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// No authenticated identity, or the backend rejected the credentials
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Remote backend or transport failure
    #[error("Store error{}: {message}", status_suffix(.status))]
    Store {
        status: Option<u16>,
        message: String,
    },

    /// Local storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl ExpenseError {
    /// Create a store error without an HTTP status (transport failures)
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            status: None,
            message: message.into(),
        }
    }

    /// Create a store error from an HTTP status and response body
    pub fn store_status(status: u16, message: impl Into<String>) -> Self {
        Self::Store {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create the error returned when an operation needs a signed-in user
    pub fn not_signed_in() -> Self {
        Self::Auth("User not authenticated. Run 'expenses login' first.".into())
    }

    /// Create a validation error for a missing required field
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Please fill all required fields ({} is missing)", field))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a remote store error
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ExpenseError {
    fn from(err: reqwest::Error) -> Self {
        Self::Store {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
