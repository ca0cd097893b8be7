//! Shared application service layer for thermomodel.
//!
//! Resolves scenarios, runs them through the recurrence engine and hands the
//! results to the report/export layer. Front ends only format what comes back.

pub mod error;
pub mod run_service;
pub mod scenario_service;
pub mod sweep_service;

pub use error::{AppError, AppResult};
pub use run_service::{ExportOutcome, RunResponse, RunTimingSummary, execute_run};
pub use scenario_service::{
    ControlKind, ScenarioOverrides, load_scenario, resolve_scenario, save_scenario,
};
pub use sweep_service::{SweepResponse, execute_sweep};
