//! Result data types.

use serde::{Deserialize, Serialize};
use tm_sim::{InitialCondition, SimulationOutput};

/// One reported step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub step: usize,
    /// Control value applied out of this step. `None` on the last row.
    pub control: Option<f64>,
    pub linear: f64,
    pub nonlinear: f64,
}

/// Flatten a run into rows for steps `0..=step_count`.
pub fn rows(output: &SimulationOutput) -> Vec<ResultRow> {
    output
        .linear
        .iter()
        .enumerate()
        .map(|(step, &linear)| ResultRow {
            step,
            control: output.control_at(step),
            linear,
            nonlinear: output.nonlinear.get(step).unwrap_or(f64::NAN),
        })
        .collect()
}

/// End-of-run figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient: Option<f64>,
    pub initial: f64,
    pub final_linear: f64,
    pub final_nonlinear: f64,
    /// `|final_linear − final_nonlinear|`.
    pub divergence: f64,
}

pub fn summarize(output: &SimulationOutput, initial: &InitialCondition) -> RunSummary {
    RunSummary {
        steps: output.step_count(),
        ambient: initial.ambient,
        initial: output.linear.initial(),
        final_linear: output.linear.final_value(),
        final_nonlinear: output.nonlinear.final_value(),
        divergence: output.final_divergence(),
    }
}
