//! Parameter sweep service.

use std::path::Path;

use tm_results::export_sweep_csv;
use tm_scenario::{Scenario, validate_scenario};
use tm_sim::{SweepDefinition, SweepPoint, run_sweep};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::run_service::ExportOutcome;

#[derive(Debug, Clone)]
pub struct SweepResponse {
    pub definition: SweepDefinition,
    pub points: Vec<SweepPoint>,
    pub export: ExportOutcome,
}

/// Run `definition` against `scenario`, optionally writing the table to `csv`.
pub fn execute_sweep(
    scenario: &Scenario,
    definition: SweepDefinition,
    csv: Option<&Path>,
) -> AppResult<SweepResponse> {
    validate_scenario(scenario)?;

    info!(
        scenario = %scenario.name,
        parameter = %definition.parameter,
        points = definition.num_points,
        "running sweep"
    );
    let points = run_sweep(
        &definition,
        scenario.step_count(),
        &scenario.coefficients,
        &scenario.initial,
        &scenario.control,
        scenario.mode,
    );

    let export = match csv {
        None => ExportOutcome::Skipped,
        Some(path) => match export_sweep_csv(path, &definition, &points) {
            Ok(receipt) => ExportOutcome::Written(receipt),
            Err(err) => {
                warn!(error = %err, "sweep export failed");
                ExportOutcome::Failed(err.to_string())
            }
        },
    };

    Ok(SweepResponse {
        definition,
        points,
        export,
    })
}
