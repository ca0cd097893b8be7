//! Error types for the tm-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and gives
/// the CLI one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Simulation setup error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tm_scenario::ScenarioError> for AppError {
    fn from(err: tm_scenario::ScenarioError) -> Self {
        match err {
            tm_scenario::ScenarioError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<tm_scenario::ValidationError> for AppError {
    fn from(err: tm_scenario::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tm_sim::SimError> for AppError {
    fn from(err: tm_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<tm_results::ResultsError> for AppError {
    fn from(err: tm_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
