//! JSON Export functionality
//!
//! Exports the whole ledger to JSON with schema versioning and summary
//! metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, Money};
use crate::reports::total_of;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All records, in ledger order
    pub expenses: Vec<ExpenseRecord>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// Earliest record month
    pub earliest_month: Option<String>,

    /// Latest record month
    pub latest_month: Option<String>,
}

impl LedgerExport {
    /// Build an export from a ledger snapshot
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let metadata = ExportMetadata {
            expense_count: records.len(),
            total: total_of(records),
            earliest_month: records.iter().map(|r| r.date).min().map(|d| d.to_string()),
            latest_month: records.iter().map(|r| r.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: records.to_vec(),
            metadata,
        }
    }

    /// Check that the export is readable by this version and self-consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but the export holds {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        let total = total_of(&self.expenses);
        if self.metadata.total != total {
            return Err(format!(
                "Metadata total {} does not match the expenses ({})",
                self.metadata.total, total
            ));
        }

        Ok(())
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = LedgerExport::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export, checking it before use
pub fn import_from_json(json_str: &str) -> LedgerResult<LedgerExport> {
    let export: LedgerExport =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Export(e.to_string()))?;

    export.validate().map_err(LedgerError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, YearMonth};

    fn sample_ledger() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(
                Money::from_cents(3000),
                "Groceries",
                Category::Food,
                YearMonth::new(2024, 2).unwrap(),
            ),
            ExpenseRecord::new(
                Money::from_cents(2400),
                "Snacks",
                Category::Other,
                YearMonth::new(2023, 11).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_metadata() {
        let export = LedgerExport::from_records(&sample_ledger());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.total, Money::from_cents(5400));
        assert_eq!(export.metadata.earliest_month.as_deref(), Some("2023-11"));
        assert_eq!(export.metadata.latest_month.as_deref(), Some("2024-02"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_empty_ledger_metadata() {
        let export = LedgerExport::from_records(&[]);
        assert_eq!(export.metadata.expense_count, 0);
        assert_eq!(export.metadata.earliest_month, None);
    }

    #[test]
    fn test_json_readback() {
        let mut output = Vec::new();
        export_json(&sample_ledger(), &mut output, true).unwrap();

        let json_string = String::from_utf8(output).unwrap();
        assert!(json_string.contains("\"date\": \"2024-02\""));
        assert!(json_string.contains("\"amount\": 30"));

        let imported = import_from_json(&json_string).unwrap();
        assert_eq!(imported.expenses, sample_ledger());
    }

    #[test]
    fn test_tampered_export_is_rejected() {
        let mut export = LedgerExport::from_records(&sample_ledger());
        export.expenses.pop();
        let json_string = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json_string).unwrap_err();
        assert!(err.to_string().contains("Metadata"));
    }

    #[test]
    fn test_schema_mismatch() {
        let mut export = LedgerExport::from_records(&sample_ledger());
        export.schema_version = "0.1.0".into();
        assert!(export.validate().unwrap_err().contains("Schema version mismatch"));
    }
}
