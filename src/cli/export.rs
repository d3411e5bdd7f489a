//! CLI commands for data export

use chrono::Local;
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::create_output;
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{
    export_expenses_csv, export_json, export_yaml, import_from_json, import_from_yaml,
    LedgerExport,
};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense
    Csv,
    /// Full ledger with metadata
    Json,
    /// Full ledger with metadata, human-readable
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path, defaults to a timestamped file in the exports directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Default destination for an export
pub fn default_export_path(paths: &LedgerPaths, format: ExportFormat) -> PathBuf {
    paths.export_dir().join(format!(
        "expenses-{}.{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    ))
}

/// Handle `export`
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> LedgerResult<()> {
    let output = args
        .output
        .unwrap_or_else(|| default_export_path(storage.paths(), args.format));
    let records = storage.ledger.records();

    let mut writer = create_output(&output)?;
    match args.format {
        ExportFormat::Csv => export_expenses_csv(records, &mut writer)?,
        ExportFormat::Json => export_json(records, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(records, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Err(e) = storage.log_export(args.format.extension(), &output.display().to_string()) {
        warn!(error = %e, "failed to write audit entry");
    }

    println!(
        "Exported {} expense(s) to: {}",
        records.len(),
        output.display()
    );
    Ok(())
}

/// Read a JSON or YAML export back, checking it against its own metadata
pub fn read_export(path: &Path) -> LedgerResult<LedgerExport> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        LedgerError::Export(format!("Failed to read {}: {}", path.display(), e))
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => import_from_json(&contents),
        Some("yaml") | Some("yml") => import_from_yaml(&contents),
        _ => Err(LedgerError::Export(format!(
            "{} is not a JSON or YAML export",
            path.display()
        ))),
    }
}

/// Handle `verify`
pub fn handle_verify_command(path: &Path, currency_symbol: &str) -> LedgerResult<()> {
    let export = read_export(path)?;

    println!("Export OK: {}", path.display());
    println!("  Schema version: {}", export.schema_version);
    println!("  Exported at:    {}", export.exported_at);
    println!("  Expenses:       {}", export.metadata.expense_count);
    println!(
        "  Total:          {}",
        export.metadata.total.format_with_symbol(currency_symbol)
    );
    if let (Some(first), Some(last)) = (
        &export.metadata.earliest_month,
        &export.metadata.latest_month,
    ) {
        println!("  Months:         {} to {}", first, last);
    }
    Ok(())
}
