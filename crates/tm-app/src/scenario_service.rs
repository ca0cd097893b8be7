//! Scenario resolution: preset or file, then command-line overrides.

use std::path::{Path, PathBuf};

use tm_controls::{ConstantSignal, ControlSignal, SinusoidalSignal};
use tm_scenario::{Preset, Scenario, ScenarioError, validate_scenario};
use tm_sim::ControlMode;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Which built-in control source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Sinusoidal,
    /// Held at `u0`.
    Constant,
}

/// Field-level overrides applied on top of a preset or scenario file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub steps: Option<i64>,
    /// Retained-state gain for both models.
    pub a: Option<f64>,
    /// Linear control gain.
    pub b: Option<f64>,
    /// Quadratic self-feedback gain of the nonlinear model.
    pub b_nl: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub y0: Option<f64>,
    pub u0: Option<f64>,
    pub ambient: Option<f64>,
    pub control: Option<ControlKind>,
    pub mode: Option<ControlMode>,
    pub csv: Option<PathBuf>,
    pub no_export: bool,
    pub no_table: bool,
}

/// Load and validate a scenario file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let scenario = read_scenario(path)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    tm_scenario::save_yaml(path, scenario)?;
    Ok(())
}

/// Start from `path` (or `preset` when no file is given), apply overrides,
/// then validate the result.
pub fn resolve_scenario(
    preset: Preset,
    path: Option<&Path>,
    overrides: &ScenarioOverrides,
) -> AppResult<Scenario> {
    let mut scenario = match path {
        Some(path) => read_scenario(path)?,
        None => preset.scenario(),
    };
    debug!(name = %scenario.name, "resolved base scenario");

    apply_overrides(&mut scenario, overrides)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

fn read_scenario(path: &Path) -> AppResult<Scenario> {
    tm_scenario::read_yaml(path).map_err(|err| match err {
        ScenarioError::Io(source) => AppError::ScenarioFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

fn apply_overrides(scenario: &mut Scenario, o: &ScenarioOverrides) -> AppResult<()> {
    if let Some(steps) = o.steps {
        scenario.steps = steps;
    }

    let coeffs = &mut scenario.coefficients;
    if let Some(a) = o.a {
        coeffs.linear.a = a;
        coeffs.nonlinear.a = a;
    }
    if let Some(b) = o.b {
        coeffs.linear.b = b;
    }
    if let Some(b_nl) = o.b_nl {
        coeffs.nonlinear.b = b_nl;
    }
    if let Some(c) = o.c {
        coeffs.nonlinear.c = c;
    }
    if let Some(d) = o.d {
        coeffs.nonlinear.d = d;
    }

    let initial = &mut scenario.initial;
    if let Some(y0) = o.y0 {
        initial.y0 = y0;
    }
    if let Some(u0) = o.u0 {
        initial.u0 = Some(u0);
        if let ControlSignal::Constant(c) = &mut scenario.control {
            c.value = u0;
        }
    }
    if let Some(ambient) = o.ambient {
        initial.ambient = Some(ambient);
    }

    match o.control {
        Some(ControlKind::Sinusoidal) => {
            scenario.control = ControlSignal::Sinusoidal(SinusoidalSignal::default());
        }
        Some(ControlKind::Constant) => {
            let u0 = scenario.initial.u0.ok_or_else(|| {
                AppError::InvalidInput("constant control requires u0".to_string())
            })?;
            scenario.control = ControlSignal::Constant(ConstantSignal { value: u0 });
        }
        None => {}
    }

    if let Some(mode) = o.mode {
        scenario.mode = mode;
    }

    if let Some(csv) = &o.csv {
        scenario.output.csv = Some(csv.clone());
    }
    if o.no_export {
        scenario.output.csv = None;
    }
    if o.no_table {
        scenario.output.print_table = false;
    }

    Ok(())
}
