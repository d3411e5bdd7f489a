//! CSV Export functionality
//!
//! One row per record, spreadsheet-friendly amounts.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

/// Export all records to CSV
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> LedgerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Month", "Category", "Description", "Amount"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        wtr.write_record([
            record.date.to_string(),
            record.category.label().to_string(),
            record.description.clone(),
            format!("{:.2}", record.amount.to_decimal()),
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, YearMonth};

    #[test]
    fn test_export_expenses_csv() {
        let records = vec![
            ExpenseRecord::new(
                Money::from_cents(1250),
                "Lunch, with Sam",
                Category::Food,
                YearMonth::new(2024, 3).unwrap(),
            ),
            ExpenseRecord::new(
                Money::from_cents(-500),
                "Refund",
                Category::Other,
                YearMonth::new(2024, 4).unwrap(),
            ),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Month,Category,Description,Amount");
        assert_eq!(lines[1], "2024-03,Food,\"Lunch, with Sam\",12.50");
        assert_eq!(lines[2], "2024-04,Other,Refund,-5.00");
    }

    #[test]
    fn test_export_empty_ledger() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Month,Category,Description,Amount\n");
    }
}
