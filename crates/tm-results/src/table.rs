//! Fixed-width console rendering.

use std::fmt::Write;

use tm_sim::{SweepDefinition, SweepPoint};

use crate::types::{ResultRow, RunSummary};

const RULE: &str = "=============================================";
const THIN_RULE: &str = "---------------------------------------------";

/// Table of `{step, u(τ), linear, nonlinear}` with two decimals.
pub fn format_table(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Controlled object simulation results");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:>6}{:>12}{:>16}{:>16}",
        "Step", "u(tau)", "Linear", "Nonlinear"
    );
    let _ = writeln!(out, "{THIN_RULE}");

    for row in rows {
        let _ = writeln!(
            out,
            "{:>6}{:>12.2}{:>16.2}{:>16.2}",
            row.step,
            row.control.unwrap_or(0.0),
            row.linear,
            row.nonlinear
        );
    }
    out
}

pub fn format_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Simulation summary ({} steps)", summary.steps);
    let _ = writeln!(out, "{RULE}");
    if let Some(ambient) = summary.ambient {
        let _ = writeln!(out, "Ambient temperature (Y0):           {:.4}", ambient);
    }
    let _ = writeln!(out, "Initial temperature:                {:.4}", summary.initial);
    let _ = writeln!(
        out,
        "Final temperature (linear model):    {:.4}",
        summary.final_linear
    );
    let _ = writeln!(
        out,
        "Final temperature (nonlinear model): {:.4}",
        summary.final_nonlinear
    );
    let _ = writeln!(
        out,
        "Difference between models:          {:.4}",
        summary.divergence
    );
    out
}

pub fn format_sweep_table(definition: &SweepDefinition, points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Sweep of {} from {} to {} ({} points)",
        definition.parameter, definition.start, definition.end, definition.num_points
    );
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "{:>10}{:>16}{:>16}{:>16}",
        definition.parameter.to_string(),
        "Linear",
        "Nonlinear",
        "Difference"
    );
    for p in points {
        let _ = writeln!(
            out,
            "{:>10.4}{:>16.4}{:>16.4}{:>16.4}",
            p.value, p.final_linear, p.final_nonlinear, p.divergence
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                step: 0,
                control: Some(10.0),
                linear: 20.0,
                nonlinear: 20.0,
            },
            ResultRow {
                step: 1,
                control: None,
                linear: 20.1234,
                nonlinear: -0.1,
            },
        ]
    }

    #[test]
    fn table_rows_are_fixed_width() {
        let table = format_table(&sample_rows());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5 + 2);
        assert_eq!(lines[5], "     0       10.00           20.00           20.00");
        assert_eq!(lines[6], "     1        0.00           20.12           -0.10");
    }

    #[test]
    fn summary_omits_missing_ambient() {
        let mut summary = RunSummary {
            steps: 1,
            ambient: None,
            initial: 20.0,
            final_linear: 16.5,
            final_nonlinear: -31.7,
            divergence: 48.2,
        };
        let text = format_summary(&summary);
        assert!(!text.contains("Ambient"));
        assert!(text.contains("Difference between models:          48.2000"));

        summary.ambient = Some(25.0);
        assert!(format_summary(&summary).contains("25.0000"));
    }

    #[test]
    fn non_finite_values_print_as_is() {
        let rows = [ResultRow {
            step: 3,
            control: Some(1.0),
            linear: f64::INFINITY,
            nonlinear: f64::NAN,
        }];
        let table = format_table(&rows);
        assert!(table.contains("inf"));
        assert!(table.contains("NaN"));
    }
}
