//! # Error Types
//!
//! Structured error types for quote_core. These errors are designed to be
//! informative for both humans and front ends, carrying enough context to
//! render a per-field message without string parsing.
//!
//! Note that the estimate calculator itself never returns these: a bad
//! square footage yields no estimate (`Option::None`) rather than an error.
//! Structured errors belong to lead intake, where each field has a rule
//! and a message (see [`crate::leads`]).
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn validate_phone(phone: &str) -> QuoteResult<()> {
//!     if phone.len() < 10 {
//!         return Err(QuoteError::InvalidInput {
//!             field: "phone".to_string(),
//!             value: phone.to_string(),
//!             reason: "Phone number must be at least 10 characters".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for intake and catalog operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by form layers and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// An input value is invalid (too short, wrong shape, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Service not found in the catalog
    #[error("Service not found: {slug}")]
    ServiceNotFound { slug: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl QuoteError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        QuoteError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        QuoteError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ServiceNotFound error
    pub fn service_not_found(slug: impl Into<String>) -> Self {
        QuoteError::ServiceNotFound {
            slug: slug.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidInput { .. } => "INVALID_INPUT",
            QuoteError::MissingField { .. } => "MISSING_FIELD",
            QuoteError::ServiceNotFound { .. } => "SERVICE_NOT_FOUND",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// The field this error points at, when it points at one.
    ///
    /// Form layers use this to attach the message to the right control.
    pub fn field(&self) -> Option<&str> {
        match self {
            QuoteError::InvalidInput { field, .. } => Some(field),
            QuoteError::MissingField { field } => Some(field),
            QuoteError::ServiceNotFound { .. } | QuoteError::SerializationError { .. } => None,
        }
    }
}
