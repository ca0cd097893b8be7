//! Control-signal sources for thermomodel.
//!
//! The plant models are driven by a scalar control input `u(τ)` evaluated once
//! per discrete step. Anything that maps a step index to a control value is a
//! [`ControlSource`], so the recurrence engine never special-cases where its
//! input comes from:
//! - [`SinusoidalSignal`]: `base + amplitude·sin(frequency·τ)`
//! - [`ConstantSignal`]: the same value at every step
//! - any `Fn(usize) -> f64` closure

pub mod error;
pub mod signal;

pub use error::{ControlError, ControlResult};
pub use signal::{
    AMPLITUDE, BASE_SIGNAL, ConstantSignal, ControlSignal, ControlSource, FREQUENCY,
    SinusoidalSignal, generate_control_signal,
};
