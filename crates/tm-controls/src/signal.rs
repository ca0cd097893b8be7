//! Control signal sources.

use crate::error::ControlResult;
use serde::{Deserialize, Serialize};
use tm_core::ensure_finite;

/// Offset of the default sinusoidal control signal.
pub const BASE_SIGNAL: f64 = 10.0;
/// Amplitude of the default sinusoidal control signal.
pub const AMPLITUDE: f64 = 5.0;
/// Angular frequency (rad per step) of the default sinusoidal control signal.
pub const FREQUENCY: f64 = 0.1;

/// Default control input at `step`: `10 + 5·sin(0.1·step)`.
///
/// Deterministic and stateless; bounded in `[5, 15]`.
pub fn generate_control_signal(step: usize) -> f64 {
    BASE_SIGNAL + AMPLITUDE * (FREQUENCY * step as f64).sin()
}

/// Anything that yields a control value for a step index.
pub trait ControlSource {
    /// Control value applied on the transition out of `step`.
    fn value(&self, step: usize) -> f64;
}

impl<F> ControlSource for F
where
    F: Fn(usize) -> f64,
{
    fn value(&self, step: usize) -> f64 {
        self(step)
    }
}

/// Sinusoidal control input `base + amplitude·sin(frequency·τ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinusoidalSignal {
    pub base: f64,
    pub amplitude: f64,
    /// Radians per step.
    pub frequency: f64,
}

impl SinusoidalSignal {
    /// Create a sinusoid, rejecting non-finite parameters.
    pub fn new(base: f64, amplitude: f64, frequency: f64) -> ControlResult<Self> {
        Ok(Self {
            base: ensure_finite(base, "base")?,
            amplitude: ensure_finite(amplitude, "amplitude")?,
            frequency: ensure_finite(frequency, "frequency")?,
        })
    }

    /// Lowest and highest value the signal can take.
    pub fn bounds(&self) -> (f64, f64) {
        let half = self.amplitude.abs();
        (self.base - half, self.base + half)
    }
}

impl Default for SinusoidalSignal {
    fn default() -> Self {
        Self {
            base: BASE_SIGNAL,
            amplitude: AMPLITUDE,
            frequency: FREQUENCY,
        }
    }
}

impl ControlSource for SinusoidalSignal {
    fn value(&self, step: usize) -> f64 {
        self.base + self.amplitude * (self.frequency * step as f64).sin()
    }
}

/// Control input held at one value for every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantSignal {
    pub value: f64,
}

impl ConstantSignal {
    pub fn new(value: f64) -> ControlResult<Self> {
        Ok(Self {
            value: ensure_finite(value, "constant control value")?,
        })
    }
}

impl ControlSource for ConstantSignal {
    fn value(&self, _step: usize) -> f64 {
        self.value
    }
}

/// Serializable choice between the built-in control sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlSignal {
    Sinusoidal(SinusoidalSignal),
    Constant(ConstantSignal),
}

impl ControlSignal {
    /// Value used as `u0` when a caller needs a single constant input.
    pub fn initial_value(&self) -> f64 {
        self.value(0)
    }
}

impl Default for ControlSignal {
    fn default() -> Self {
        Self::Sinusoidal(SinusoidalSignal::default())
    }
}

impl ControlSource for ControlSignal {
    fn value(&self, step: usize) -> f64 {
        match self {
            Self::Sinusoidal(s) => s.value(step),
            Self::Constant(c) => c.value(step),
        }
    }
}
