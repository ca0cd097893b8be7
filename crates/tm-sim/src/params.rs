//! Model coefficients, initial conditions and control-sourcing modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tm_core::ensure_finite;

use crate::error::SimResult;

/// Coefficients `{a, b, c, d}` of one plant model.
///
/// For the linear model only `a` (retained-state gain) and `b` (control gain)
/// matter. For the nonlinear model `b` scales the quadratic self-feedback term,
/// `c` the control input and `d` the disturbance term. No range restriction:
/// unstable trajectories are a valid outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub a: f64,
    pub b: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub d: f64,
}

impl ModelParameters {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Coefficients for the linear model (`c = d = 0`).
    pub fn linear(a: f64, b: f64) -> Self {
        Self { a, b, c: 0.0, d: 0.0 }
    }

    /// Reject NaN or infinite coefficients.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.a, "a")?;
        ensure_finite(self.b, "b")?;
        ensure_finite(self.c, "c")?;
        ensure_finite(self.d, "d")?;
        Ok(())
    }
}

/// Per-model coefficient sets.
///
/// Both models usually share one set; keeping them separate allows a distinct
/// quadratic gain for the nonlinear model while the linear model keeps its own `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelCoefficients {
    pub linear: ModelParameters,
    pub nonlinear: ModelParameters,
}

impl ModelCoefficients {
    /// Same coefficients for both models.
    pub fn shared(params: ModelParameters) -> Self {
        Self {
            linear: params,
            nonlinear: params,
        }
    }

    pub fn split(linear: ModelParameters, nonlinear: ModelParameters) -> Self {
        Self { linear, nonlinear }
    }

    pub fn validate(&self) -> SimResult<()> {
        self.linear.validate()?;
        self.nonlinear.validate()
    }
}

impl From<ModelParameters> for ModelCoefficients {
    fn from(params: ModelParameters) -> Self {
        Self::shared(params)
    }
}

/// Starting point of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCondition {
    /// Initial state `y0`, seeded as both trailing states of the nonlinear model.
    pub y0: f64,
    /// Constant control value for runs whose input is not self-generating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u0: Option<f64>,
    /// Ambient (room) temperature. Reported only, never enters the dynamics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient: Option<f64>,
}

impl InitialCondition {
    pub fn new(y0: f64) -> Self {
        Self {
            y0,
            u0: None,
            ambient: None,
        }
    }

    pub fn with_u0(mut self, u0: f64) -> Self {
        self.u0 = Some(u0);
        self
    }

    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = Some(ambient);
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.y0, "y0")?;
        if let Some(u0) = self.u0 {
            ensure_finite(u0, "u0")?;
        }
        if let Some(ambient) = self.ambient {
            ensure_finite(ambient, "ambient")?;
        }
        Ok(())
    }
}

/// How the steppers source their control inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlMode {
    /// Linear model reads the control source per step; the nonlinear model
    /// reuses that trace, with `u_prev` lagging one step and starting at 0.
    #[default]
    Coupled,
    /// Both models see the constant `u0` at every step, for `u_cur` and `u_prev`.
    IndependentConstant,
}

impl ControlMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Coupled => "coupled",
            Self::IndependentConstant => "independent-constant",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
