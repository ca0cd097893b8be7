//! Delimited text and JSON artifacts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tm_sim::{SweepDefinition, SweepPoint};

use crate::types::{ResultRow, RunSummary};
use crate::{ResultsError, ResultsResult};

pub const CSV_HEADER: &str = "Step,u(tau),Linear_Model,Nonlinear_Model";
pub const CSV_SEPARATOR: char = ',';

/// What an export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReceipt {
    pub path: PathBuf,
    /// Data rows, header excluded.
    pub rows_written: usize,
}

/// Write the header and one line per row. The control column of a row without
/// a transition is written as `0`.
pub fn write_csv<W: Write>(mut writer: W, rows: &[ResultRow]) -> std::io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(
            writer,
            "{}{sep}{}{sep}{}{sep}{}",
            row.step,
            row.control.unwrap_or(0.0),
            row.linear,
            row.nonlinear,
            sep = CSV_SEPARATOR
        )?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write the rows to it.
pub fn export_csv(path: &Path, rows: &[ResultRow]) -> ResultsResult<ExportReceipt> {
    let write_err = |source| ResultsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    write_csv(BufWriter::new(file), rows).map_err(write_err)?;

    Ok(ExportReceipt {
        path: path.to_path_buf(),
        rows_written: rows.len(),
    })
}

/// Sweep results, one line per point.
pub fn export_sweep_csv(
    path: &Path,
    definition: &SweepDefinition,
    points: &[SweepPoint],
) -> ResultsResult<ExportReceipt> {
    let write_err = |source| ResultsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    write_sweep_rows(BufWriter::new(file), definition, points).map_err(write_err)?;

    Ok(ExportReceipt {
        path: path.to_path_buf(),
        rows_written: points.len(),
    })
}

fn write_sweep_rows<W: Write>(
    mut writer: W,
    definition: &SweepDefinition,
    points: &[SweepPoint],
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}{sep}Final_Linear{sep}Final_Nonlinear{sep}Difference",
        definition.parameter,
        sep = CSV_SEPARATOR
    )?;
    for p in points {
        writeln!(
            writer,
            "{}{sep}{}{sep}{}{sep}{}",
            p.value,
            p.final_linear,
            p.final_nonlinear,
            p.divergence,
            sep = CSV_SEPARATOR
        )?;
    }
    writer.flush()
}

pub fn write_summary_json(path: &Path, summary: &RunSummary) -> ResultsResult<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).map_err(|source| ResultsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout() {
        let rows = [
            ResultRow {
                step: 0,
                control: Some(5.0),
                linear: 20.0,
                nonlinear: 20.0,
            },
            ResultRow {
                step: 1,
                control: None,
                linear: 16.5,
                nonlinear: -31.75,
            },
        ];
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Step,u(tau),Linear_Model,Nonlinear_Model\n0,5,20,20\n1,0,16.5,-31.75\n"
        );
    }
}
