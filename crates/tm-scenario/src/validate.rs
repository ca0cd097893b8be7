//! Scenario validation logic.

use tm_controls::ControlSignal;
use tm_core::{TmError, ensure_finite, ensure_in_range};
use tm_sim::SimError;

use crate::schema::{MAX_STEPS, SCENARIO_VERSION, Scenario};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl From<TmError> for ValidationError {
    fn from(e: TmError) -> Self {
        match e {
            TmError::NonFinite { what, value } => ValidationError::InvalidValue {
                field: what.to_string(),
                value: value.to_string(),
                reason: "must be finite".to_string(),
            },
            TmError::OutOfRange {
                what,
                value,
                min,
                max,
            } => ValidationError::InvalidValue {
                field: what.to_string(),
                value: value.to_string(),
                reason: format!("must be between {} and {}", min, max),
            },
            TmError::InvalidArg { what } => ValidationError::InvalidValue {
                field: what.to_string(),
                value: String::new(),
                reason: "invalid".to_string(),
            },
        }
    }
}

impl From<SimError> for ValidationError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::NonFinite { what, value } => TmError::NonFinite { what, value }.into(),
            SimError::InvalidArg { what } => TmError::InvalidArg { what }.into(),
        }
    }
}

/// Accept a step count in `1..=MAX_STEPS`.
pub fn validate_steps(steps: i64) -> Result<usize, ValidationError> {
    let steps = ensure_in_range(steps, 1, MAX_STEPS, "steps")?;
    // In range, so always representable.
    Ok(steps as usize)
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_steps(scenario.steps)?;
    scenario.coefficients.validate()?;
    scenario.initial.validate()?;

    match &scenario.control {
        ControlSignal::Sinusoidal(s) => {
            ensure_finite(s.base, "control.base")?;
            ensure_finite(s.amplitude, "control.amplitude")?;
            ensure_finite(s.frequency, "control.frequency")?;
        }
        ControlSignal::Constant(c) => {
            ensure_finite(c.value, "control.value")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preset;

    #[test]
    fn steps_bounds() {
        assert_eq!(validate_steps(1).unwrap(), 1);
        assert_eq!(validate_steps(MAX_STEPS).unwrap(), 1_000_000);
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(-5).is_err());
        assert!(validate_steps(MAX_STEPS + 1).is_err());
    }

    #[test]
    fn steps_error_names_the_field() {
        let err = validate_steps(0).unwrap_err();
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn rejects_non_finite_coefficient() {
        let mut s = Preset::Lab1.scenario();
        s.coefficients.nonlinear.d = f64::NAN;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::InvalidValue { field, .. }) if field == "d"
        ));
    }

    #[test]
    fn rejects_future_version() {
        let mut s = Preset::Lab2.scenario();
        s.version = SCENARIO_VERSION + 1;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
