//! Scenario schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tm_controls::ControlSignal;
use tm_sim::{ControlMode, InitialCondition, ModelCoefficients};

/// Current scenario file version.
pub const SCENARIO_VERSION: u32 = 1;

/// Largest accepted step count.
pub const MAX_STEPS: i64 = 1_000_000;

/// Default CSV artifact name.
pub const DEFAULT_CSV: &str = "simulation_results.csv";

/// Everything needed for one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    /// Number of transitions. Signed so that bad input reaches validation.
    pub steps: i64,
    pub coefficients: ModelCoefficients,
    pub initial: InitialCondition,
    #[serde(default)]
    pub control: ControlSignal,
    #[serde(default)]
    pub mode: ControlMode,
    #[serde(default)]
    pub output: OutputDef,
}

impl Scenario {
    /// Step count as an index type. Only meaningful after validation.
    pub fn step_count(&self) -> usize {
        usize::try_from(self.steps).unwrap_or(0)
    }
}

/// Where results go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDef {
    /// CSV artifact path. `None` disables the export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub print_table: bool,
}

impl Default for OutputDef {
    fn default() -> Self {
        Self {
            csv: None,
            print_table: true,
        }
    }
}

fn default_version() -> u32 {
    SCENARIO_VERSION
}

fn default_true() -> bool {
    true
}
