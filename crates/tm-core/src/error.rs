use thiserror::Error;

pub type TmResult<T> = Result<T, TmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value} (allowed {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
