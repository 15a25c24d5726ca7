//! # Error Types
//!
//! Structured error types for fluid_core. The scale generators themselves
//! never fail: degenerate inputs produce degenerate output. Errors only come
//! from strict-mode validation, request decoding and I/O at the edges.
//!
//! ## Example
//!
//! ```rust
//! use fluid_core::errors::{FluidError, FluidResult};
//!
//! fn validate_width(width_px: f64) -> FluidResult<()> {
//!     if width_px <= 0.0 {
//!         return Err(FluidError::invalid_input(
//!             "minWidth",
//!             width_px.to_string(),
//!             "Viewport width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-320.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fluid_core operations
pub type FluidResult<T> = Result<T, FluidError>;

/// Structured error type for fluid scale operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FluidError {
    /// An input value is invalid (non-finite, not positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The viewport range has zero width, so no slope can be computed
    #[error("Degenerate viewport range: minWidth {min_width} equals maxWidth {max_width}")]
    DegenerateRange { min_width: f64, max_width: f64 },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (CLI input)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl FluidError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FluidError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FluidError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FluidError::InvalidInput { .. } => "INVALID_INPUT",
            FluidError::DegenerateRange { .. } => "DEGENERATE_RANGE",
            FluidError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FluidError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for FluidError {
    fn from(err: serde_json::Error) -> Self {
        FluidError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FluidError::invalid_input("minSize", "-16", "Size must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: FluidError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FluidError::DegenerateRange { min_width: 320.0, max_width: 320.0 }.error_code(),
            "DEGENERATE_RANGE"
        );
        assert_eq!(FluidError::file_error("read", "a.json", "missing").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let fluid: FluidError = err.into();
        assert_eq!(fluid.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_message() {
        let error = FluidError::DegenerateRange { min_width: 320.0, max_width: 320.0 };
        assert_eq!(
            error.to_string(),
            "Degenerate viewport range: minWidth 320 equals maxWidth 320"
        );
    }
}
