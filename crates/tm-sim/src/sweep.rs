//! Parameter sweeps over independent runs.
//!
//! Each sweep point is a full [`run_simulation`] with one input replaced. Points
//! share no mutable state, so they are evaluated in parallel with rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tm_controls::ControlSource;
use tm_core::ensure_finite;

use crate::error::{SimError, SimResult};
use crate::params::{ControlMode, InitialCondition, ModelCoefficients};
use crate::sim::run_simulation;

/// Input varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    /// Retained-state gain, applied to both models.
    A,
    /// Linear control gain.
    B,
    /// Quadratic self-feedback gain of the nonlinear model.
    BNl,
    C,
    D,
    /// Initial state.
    Y0,
}

impl SweepParameter {
    /// Return copies of the inputs with this parameter set to `value`.
    pub fn apply(
        &self,
        coefficients: &ModelCoefficients,
        initial: &InitialCondition,
        value: f64,
    ) -> (ModelCoefficients, InitialCondition) {
        let mut coeffs = *coefficients;
        let mut ic = *initial;
        match self {
            Self::A => {
                coeffs.linear.a = value;
                coeffs.nonlinear.a = value;
            }
            Self::B => coeffs.linear.b = value,
            Self::BNl => coeffs.nonlinear.b = value,
            Self::C => coeffs.nonlinear.c = value,
            Self::D => coeffs.nonlinear.d = value,
            Self::Y0 => ic.y0 = value,
        }
        (coeffs, ic)
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "a",
            Self::B => "b",
            Self::BNl => "b_nl",
            Self::C => "c",
            Self::D => "d",
            Self::Y0 => "y0",
        };
        f.write_str(name)
    }
}

/// Uniformly spaced sweep of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl SweepDefinition {
    pub fn new(parameter: SweepParameter, start: f64, end: f64, num_points: usize) -> SimResult<Self> {
        ensure_finite(start, "sweep start")?;
        ensure_finite(end, "sweep end")?;

        if num_points < 2 {
            return Err(SimError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(SimError::InvalidArg {
                what: "sweep start and end must be different",
            });
        }

        Ok(Self {
            parameter,
            start,
            end,
            num_points,
        })
    }

    /// All sweep values, endpoints included.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

/// Outcome of one sweep point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub final_linear: f64,
    pub final_nonlinear: f64,
    pub divergence: f64,
}

/// Run one simulation per sweep point, in parallel. Results keep the order of
/// [`SweepDefinition::generate_points`].
pub fn run_sweep<S>(
    definition: &SweepDefinition,
    step_count: usize,
    coefficients: &ModelCoefficients,
    initial: &InitialCondition,
    source: &S,
    mode: ControlMode,
) -> Vec<SweepPoint>
where
    S: ControlSource + Sync + ?Sized,
{
    definition
        .generate_points()
        .into_par_iter()
        .map(|value| {
            let (coeffs, ic) = definition.parameter.apply(coefficients, initial, value);
            let out = run_simulation(step_count, &coeffs, &ic, source, mode);
            SweepPoint {
                value,
                final_linear: out.linear.final_value(),
                final_nonlinear: out.nonlinear.final_value(),
                divergence: out.final_divergence(),
            }
        })
        .collect()
}
