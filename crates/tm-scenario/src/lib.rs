//! tm-scenario: scenario file format, presets and validation.

pub mod presets;
pub mod schema;
pub mod validate;

pub use presets::Preset;
pub use schema::*;
pub use validate::{ValidationError, validate_scenario, validate_steps};

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a scenario file without validating it, for callers that patch
/// fields before validation.
pub fn read_yaml(path: &std::path::Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    Ok(scenario)
}

pub fn load_yaml(path: &std::path::Path) -> ScenarioResult<Scenario> {
    let scenario = read_yaml(path)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}
