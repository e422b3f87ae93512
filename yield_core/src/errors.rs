//! # Error Types
//!
//! Structured error types for yield_core. Every failure here is a local,
//! recoverable input problem: the calculation simply does not run, and the
//! caller (CLI, GUI, whatever shell) reports it to the user. The core never
//! panics and has no fatal error paths.
//!
//! ## Example
//!
//! ```rust
//! use yield_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "bar_length_mm",
//!             length_mm.to_string(),
//!             "length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for yield_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant carries enough context for a shell to build a useful
/// user-facing message without string parsing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive dimension, unknown mode, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required numeric field is empty or unparsable
    #[error("Missing or unparsable required field: {field}")]
    MissingField { field: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("bar_length_mm", "-5", "length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_field("piece_length_mm").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            CalcError::invalid_input("f", "v", "r").error_code(),
            "INVALID_INPUT"
        );
    }
}
