//! # Error Types
//!
//! Structured error types for beam_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Two kinds of failure exist, and they are deliberately distinct:
//!
//! - [`CalcError::InvalidInput`] - a physical precondition was violated
//!   (non-positive length/E/I, negative load). User-correctable.
//! - [`CalcError::UnsupportedLoadType`] - an out-of-range load-case
//!   discriminant arrived from external data. A caller defect, not a
//!   user-input problem.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates a physical precondition
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A load-case discriminant outside the supported set
    #[error("Unsupported load type discriminant: {discriminant}")]
    UnsupportedLoadType { discriminant: u32 },
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

    /// Create an UnsupportedLoadType error
    pub fn unsupported_load_type(discriminant: u32) -> Self {
        CalcError::UnsupportedLoadType { discriminant }
    }

    /// Whether the user can fix this by editing their inputs.
    ///
    /// UnsupportedLoadType indicates a programming defect in the caller
    /// and should be routed to an internal alert, not a form message.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedLoadType { .. } => "UNSUPPORTED_LOAD_TYPE",
        }
    }
}
