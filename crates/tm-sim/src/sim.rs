//! Trajectory runs for the linear and nonlinear models.
//!
//! Trailing states live in locals owned by a single call, so nothing carries
//! over between runs. Every call returns freshly allocated sequences.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tm_controls::ControlSource;

use crate::model::{step_linear, step_nonlinear};
use crate::params::{ControlMode, InitialCondition, ModelCoefficients, ModelParameters};

/// Ordered states of one model: index 0 is the initial condition, index `k` the
/// state after `k` recurrence applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<f64>);

impl Trajectory {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<f64> {
        self.0.get(step).copied()
    }

    /// State at index 0.
    pub fn initial(&self) -> f64 {
        self.0[0]
    }

    /// State after the last transition.
    pub fn final_value(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for Trajectory {
    type Output = f64;

    fn index(&self, step: usize) -> &f64 {
        &self.0[step]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// `step_count + 1` states of the linear model.
    pub linear: Trajectory,
    /// `step_count + 1` states of the nonlinear model.
    pub nonlinear: Trajectory,
    /// Control values applied to the linear model, one per transition.
    pub control_trace: Vec<f64>,
}

impl SimulationOutput {
    pub fn step_count(&self) -> usize {
        self.control_trace.len()
    }

    /// Control value applied on the transition out of `step`, if any.
    pub fn control_at(&self, step: usize) -> Option<f64> {
        self.control_trace.get(step).copied()
    }

    /// `|final linear − final nonlinear|`.
    pub fn final_divergence(&self) -> f64 {
        (self.linear.final_value() - self.nonlinear.final_value()).abs()
    }
}

/// Run both models for `step_count` transitions.
///
/// In [`ControlMode::IndependentConstant`] the constant input is
/// `initial.u0`, falling back to `source.value(0)` when no `u0` is given.
pub fn run_simulation<S>(
    step_count: usize,
    coefficients: &ModelCoefficients,
    initial: &InitialCondition,
    source: &S,
    mode: ControlMode,
) -> SimulationOutput
where
    S: ControlSource + ?Sized,
{
    match mode {
        ControlMode::Coupled => {
            let (linear, control_trace) =
                simulate_linear(step_count, &coefficients.linear, initial.y0, source);
            let nonlinear = simulate_nonlinear_coupled(
                step_count,
                &coefficients.nonlinear,
                initial.y0,
                &control_trace,
                source,
            );
            SimulationOutput {
                linear,
                nonlinear,
                control_trace,
            }
        }
        ControlMode::IndependentConstant => {
            let u0 = initial.u0.unwrap_or_else(|| source.value(0));
            let constant = move |_step: usize| u0;
            let (linear, control_trace) =
                simulate_linear(step_count, &coefficients.linear, initial.y0, &constant);
            let nonlinear =
                simulate_nonlinear_constant(step_count, &coefficients.nonlinear, initial.y0, u0);
            SimulationOutput {
                linear,
                nonlinear,
                control_trace,
            }
        }
    }
}

/// Linear model driven by `source`. Returns the trajectory and the control
/// values it consumed.
pub fn simulate_linear<S>(
    step_count: usize,
    params: &ModelParameters,
    y0: f64,
    source: &S,
) -> (Trajectory, Vec<f64>)
where
    S: ControlSource + ?Sized,
{
    let mut states = Vec::with_capacity(step_count + 1);
    let mut trace = Vec::with_capacity(step_count);
    states.push(y0);

    let mut y = y0;
    for tau in 0..step_count {
        let u = source.value(tau);
        y = step_linear(y, u, params);
        trace.push(u);
        states.push(y);
    }

    (Trajectory(states), trace)
}

/// Nonlinear model reusing a precomputed control trace.
///
/// Steps beyond the end of `trace` evaluate `source` directly. `u_prev` is the
/// previous step's control value and starts at 0.
pub fn simulate_nonlinear_coupled<S>(
    step_count: usize,
    params: &ModelParameters,
    y0: f64,
    trace: &[f64],
    source: &S,
) -> Trajectory
where
    S: ControlSource + ?Sized,
{
    let mut u_prev = 0.0;
    fold_nonlinear(step_count, params, y0, |tau| {
        let u_cur = trace
            .get(tau)
            .copied()
            .unwrap_or_else(|| source.value(tau));
        let inputs = (u_cur, u_prev);
        u_prev = u_cur;
        inputs
    })
}

/// Nonlinear model with `u0` as both the current and the lagged control value.
pub fn simulate_nonlinear_constant(
    step_count: usize,
    params: &ModelParameters,
    y0: f64,
    u0: f64,
) -> Trajectory {
    fold_nonlinear(step_count, params, y0, |_| (u0, u0))
}

fn fold_nonlinear<F>(step_count: usize, params: &ModelParameters, y0: f64, mut inputs: F) -> Trajectory
where
    F: FnMut(usize) -> (f64, f64),
{
    let mut states = Vec::with_capacity(step_count + 1);
    states.push(y0);

    // No state before step 0: both trailing states start at y0.
    let (mut y_cur, mut y_prev) = (y0, y0);
    for tau in 0..step_count {
        let (u_cur, u_prev) = inputs(tau);
        let y_next = step_nonlinear(y_cur, y_prev, u_cur, u_prev, params);
        states.push(y_next);
        y_prev = y_cur;
        y_cur = y_next;
    }

    Trajectory(states)
}
