//! Expense display formatting
//!
//! Register-style listing of ledger records.

use crate::models::ExpenseRecord;

use super::report::{separator, truncate};

/// Format a single record as a register row
pub fn format_expense_row(record: &ExpenseRecord, currency_symbol: &str) -> String {
    format!(
        "{:7}  {:15} {:28} {:>12}",
        record.date,
        truncate(record.category.label(), 15),
        truncate(&record.description, 28),
        record.amount.format_with_symbol(currency_symbol)
    )
}

/// Format records as a register with a header and a count line
pub fn format_expense_list(records: &[&ExpenseRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:7}  {:15} {:28} {:>12}\n",
        "Month", "Category", "Description", "Amount"
    ));
    output.push_str(&separator(65));
    output.push('\n');

    for record in records {
        output.push_str(&format_expense_row(record, currency_symbol));
        output.push('\n');
    }

    output.push_str(&format!("\n{} expense(s)\n", records.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, YearMonth};

    fn lunch() -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_cents(1250),
            "Lunch",
            Category::Food,
            YearMonth::new(2024, 3).unwrap(),
        )
    }

    #[test]
    fn test_format_row() {
        let row = format_expense_row(&lunch(), "$");
        assert!(row.starts_with("2024-03  Food"));
        assert!(row.contains("Lunch"));
        assert!(row.ends_with("$12.50"));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let mut record = lunch();
        record.description = "A very long description that will not fit".into();
        let row = format_expense_row(&record, "$");
        assert!(row.contains("A very long description t..."));
    }

    #[test]
    fn test_format_list() {
        let record = lunch();
        let list = format_expense_list(&[&record, &record], "$");
        assert!(list.starts_with("Month"));
        assert!(list.ends_with("2 expense(s)\n"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses found.\n");
    }
}
