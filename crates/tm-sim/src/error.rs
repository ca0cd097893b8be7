//! Error types for simulation setup.

use thiserror::Error;

/// Errors raised while setting up a run or sweep. Stepping itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<tm_core::TmError> for SimError {
    fn from(e: tm_core::TmError) -> Self {
        match e {
            tm_core::TmError::NonFinite { what, value } => SimError::NonFinite { what, value },
            tm_core::TmError::InvalidArg { what } => SimError::InvalidArg { what },
            tm_core::TmError::OutOfRange { what, .. } => SimError::InvalidArg { what },
        }
    }
}
