//! Built-in scenarios.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tm_controls::{ConstantSignal, ControlSignal, SinusoidalSignal};
use tm_sim::{ControlMode, InitialCondition, ModelCoefficients, ModelParameters};

use crate::schema::{DEFAULT_CSV, OutputDef, SCENARIO_VERSION, Scenario};

/// Named built-in scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Sinusoidal control, shared coefficients, nonlinear model reuses the
    /// control trace. 100 steps, CSV export.
    #[default]
    Lab1,
    /// Constant control `u0 = 5`, separate quadratic gain for the nonlinear
    /// model, both models held at `u0`.
    Lab2,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::Lab1, Preset::Lab2]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lab1 => "lab1",
            Self::Lab2 => "lab2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Lab1 => "sinusoidal control, coupled nonlinear inputs, room temperature 25",
            Self::Lab2 => "constant control u0=5, independent-constant nonlinear inputs",
        }
    }

    pub fn scenario(&self) -> Scenario {
        match self {
            Self::Lab1 => Scenario {
                version: SCENARIO_VERSION,
                name: "Temperature model, sinusoidal control".to_string(),
                steps: 100,
                coefficients: ModelCoefficients::shared(ModelParameters::new(
                    0.98, 0.05, 0.03, 0.02,
                )),
                initial: InitialCondition::new(20.0).with_ambient(25.0),
                control: ControlSignal::Sinusoidal(SinusoidalSignal::default()),
                mode: ControlMode::Coupled,
                output: OutputDef {
                    csv: Some(PathBuf::from(DEFAULT_CSV)),
                    print_table: true,
                },
            },
            Self::Lab2 => Scenario {
                version: SCENARIO_VERSION,
                name: "Temperature model, constant control".to_string(),
                steps: 10,
                coefficients: ModelCoefficients::split(
                    ModelParameters::linear(0.8, 0.1),
                    ModelParameters::new(0.8, 0.12, 0.05, 0.02),
                ),
                initial: InitialCondition::new(20.0).with_u0(5.0),
                control: ControlSignal::Constant(ConstantSignal { value: 5.0 }),
                mode: ControlMode::IndependentConstant,
                output: OutputDef::default(),
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown preset '{}' (expected lab1 or lab2)", s))
    }
}
