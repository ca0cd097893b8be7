//! tm-results: console reports and file export for simulation runs.
//!
//! The engine hands over a [`tm_sim::SimulationOutput`]; this crate flattens it
//! into [`ResultRow`]s and renders them as a fixed-width table, a run summary
//! and a comma separated artifact.

pub mod export;
pub mod table;
pub mod types;

pub use export::{
    CSV_HEADER, CSV_SEPARATOR, ExportReceipt, export_csv, export_sweep_csv, write_csv,
    write_summary_json,
};
pub use table::{format_summary, format_sweep_table, format_table};
pub use types::*;

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
