//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::ExpenseRecord;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_records(records);

    let header = format!(
        "# Expense Ledger Export\n# Generated: {}\n# App Version: {}\n# Expenses: {}\n\n",
        export.exported_at, export.app_version, export.metadata.expense_count
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export, checking it before use
pub fn import_from_yaml(yaml_str: &str) -> LedgerResult<LedgerExport> {
    let export: LedgerExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Export(e.to_string()))?;

    export.validate().map_err(LedgerError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, YearMonth};

    fn sample_ledger() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(
                Money::from_cents(1250),
                "Bus pass",
                Category::Transportation,
                YearMonth::new(2024, 3).unwrap(),
            ),
            ExpenseRecord::new(
                Money::from_cents(90000),
                "Flat",
                Category::Custom("Rent".into()),
                YearMonth::new(2024, 3).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_yaml(&sample_ledger(), &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        assert!(yaml_string.starts_with("# Expense Ledger Export"));
        assert!(yaml_string.contains("Bus pass"));
        assert!(yaml_string.contains("category: Rent"));
    }

    #[test]
    fn test_yaml_readback() {
        let mut output = Vec::new();
        export_yaml(&sample_ledger(), &mut output).unwrap();

        // Comments are valid YAML, no need to strip them
        let imported = import_from_yaml(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.expenses, sample_ledger());
        assert_eq!(imported.metadata.total, Money::from_cents(91250));
    }
}
