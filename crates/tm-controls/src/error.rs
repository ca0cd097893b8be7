//! Error types for control signal construction.

use thiserror::Error;

/// Result type for control signal operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when building a control signal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a signal constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Signal parameter is not a finite number.
    #[error("Non-finite signal parameter {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<tm_core::TmError> for ControlError {
    fn from(e: tm_core::TmError) -> Self {
        match e {
            tm_core::TmError::NonFinite { what, value } => ControlError::NonFinite { what, value },
            tm_core::TmError::InvalidArg { what } => ControlError::InvalidArg { what },
            tm_core::TmError::OutOfRange { what, .. } => ControlError::InvalidArg { what },
        }
    }
}
