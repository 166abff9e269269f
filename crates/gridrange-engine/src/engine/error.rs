//! Error types for the addressing engine.

use thiserror::Error;

use super::coord::Axis;

/// Errors produced while parsing, formatting or transforming coordinates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Malformed reference text.
    #[error("Invalid reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    /// A row or column index outside `[1, max]`.
    #[error("{axis} {value} is out of range (1..={max})")]
    OutOfRange { axis: Axis, value: i64, max: u32 },

    /// Non-positive size or otherwise unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation that cannot run in the current context.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl RangeError {
    pub(crate) fn invalid_reference(reference: &str, reason: impl Into<String>) -> Self {
        RangeError::InvalidReference {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;
