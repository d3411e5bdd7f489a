//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod report;

pub use audit::handle_audit_command;
pub use expense::{handle_add_command, handle_categories_command, handle_list_command, AddArgs, ListArgs};
pub use export::{handle_export_command, handle_verify_command, read_export, ExportArgs, ExportFormat};
pub use report::{handle_chart_command, handle_summary_command, SummaryArgs};

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ValidationError, YearMonth};

/// Optional `--month M --year Y` filter shared by the reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Month number (1-12); requires --year
    #[arg(short, long, requires = "year")]
    pub month: Option<String>,

    /// Four-digit year; requires --month
    #[arg(short, long, requires = "month")]
    pub year: Option<String>,
}

impl PeriodArgs {
    /// The selected month, or `None` for the whole ledger
    pub fn resolve(&self) -> LedgerResult<Option<YearMonth>> {
        match (&self.month, &self.year) {
            (Some(month), Some(year)) => Ok(Some(
                YearMonth::from_parts(year, month).map_err(ValidationError::from)?,
            )),
            _ => Ok(None),
        }
    }
}

/// Create an output file for a report or export
pub(crate) fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
