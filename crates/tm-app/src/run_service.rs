//! Run execution service.

use std::time::Instant;

use tm_results::{ExportReceipt, ResultRow, RunSummary, export_csv, rows, summarize};
use tm_scenario::{Scenario, validate_scenario};
use tm_sim::{SimulationOutput, run_simulation};
use tracing::{debug, info, warn};

use crate::error::AppResult;

/// What happened to the file export of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Skipped,
    Written(ExportReceipt),
    /// Export failed; the in-memory results are still valid.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub compute_time_s: f64,
    pub export_time_s: f64,
    pub total_time_s: f64,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub output: SimulationOutput,
    pub rows: Vec<ResultRow>,
    pub summary: RunSummary,
    pub export: ExportOutcome,
    pub timing: RunTimingSummary,
}

/// Validate, simulate, then export.
///
/// Validation failures abort before any computation. A failed export is
/// logged and reported in [`RunResponse::export`] but does not fail the run.
pub fn execute_run(scenario: &Scenario) -> AppResult<RunResponse> {
    let started = Instant::now();
    validate_scenario(scenario)?;

    let step_count = scenario.step_count();
    info!(
        scenario = %scenario.name,
        steps = step_count,
        mode = %scenario.mode,
        "running simulation"
    );

    let compute_start = Instant::now();
    let output = run_simulation(
        step_count,
        &scenario.coefficients,
        &scenario.initial,
        &scenario.control,
        scenario.mode,
    );
    let compute_time_s = compute_start.elapsed().as_secs_f64();
    debug!(compute_time_s, "simulation finished");

    if !output.linear.final_value().is_finite() || !output.nonlinear.final_value().is_finite() {
        warn!("trajectory left the finite range; values are reported as computed");
    }

    let rows = rows(&output);
    let summary = summarize(&output, &scenario.initial);

    let export_start = Instant::now();
    let export = match &scenario.output.csv {
        None => ExportOutcome::Skipped,
        Some(path) => match export_csv(path, &rows) {
            Ok(receipt) => {
                info!(path = %receipt.path.display(), rows = receipt.rows_written, "results exported");
                ExportOutcome::Written(receipt)
            }
            Err(err) => {
                warn!(error = %err, "CSV export failed; results kept in memory");
                ExportOutcome::Failed(err.to_string())
            }
        },
    };
    let export_time_s = export_start.elapsed().as_secs_f64();

    Ok(RunResponse {
        output,
        rows,
        summary,
        export,
        timing: RunTimingSummary {
            compute_time_s,
            export_time_s,
            total_time_s: started.elapsed().as_secs_f64(),
        },
    })
}
