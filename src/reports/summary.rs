//! Expense summary report
//!
//! Total spend and the category breakdown for the whole ledger or for one
//! month, ready for the terminal or for a CSV file.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, Money, YearMonth};

use super::aggregate::{by_category, filter_by_month, total_of, CategoryShare, CategoryTotals};

/// Summary of a ledger or of one month of it
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    /// Month the summary is limited to, if any
    pub period: Option<YearMonth>,
    /// Total of all included records
    pub total: Money,
    /// Subtotals per category, first-seen order
    pub categories: CategoryTotals,
    /// Number of included records
    pub expense_count: usize,
}

impl ExpenseSummary {
    /// Summarise the given records, optionally limited to one month
    pub fn generate(records: &[ExpenseRecord], period: Option<YearMonth>) -> Self {
        match period {
            Some(period) => {
                let monthly = filter_by_month(records, period);
                Self {
                    period: Some(period),
                    total: total_of(&monthly),
                    categories: by_category(&monthly),
                    expense_count: monthly.len(),
                }
            }
            None => Self {
                period: None,
                total: total_of(records),
                categories: by_category(records),
                expense_count: records.len(),
            },
        }
    }

    /// True when no record fell inside the summary
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Chart slices for the category breakdown
    pub fn shares(&self) -> Vec<CategoryShare> {
        self.categories.shares()
    }

    /// Message shown instead of a summary when nothing matched
    pub fn empty_message(&self) -> String {
        match self.period {
            Some(period) => format!("No expenses found for {}.", period),
            None => "No expenses recorded yet.".to_string(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return format!("{}\n", self.empty_message());
        }

        let mut output = String::new();
        match self.period {
            Some(period) => output.push_str(&format!(
                "Total Expenses for {}: {}\n",
                period,
                self.total.format_with_symbol(currency_symbol)
            )),
            None => output.push_str(&format!(
                "Total Expenses: {}\n",
                self.total.format_with_symbol(currency_symbol)
            )),
        }

        output.push_str("\nExpenses by Category:\n");
        for entry in &self.categories {
            output.push_str(&format!(
                "{}: {}\n",
                entry.category,
                entry.amount.format_with_symbol(currency_symbol)
            ));
        }

        output
    }

    /// Export the category breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let month = self.period.map(|p| p.to_string()).unwrap_or_default();
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(["Month", "Category", "Amount", "Count", "Percentage"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for (entry, share) in self.categories.iter().zip(self.shares()) {
            wtr.write_record([
                month.clone(),
                entry.category.clone(),
                format!("{:.2}", entry.amount.to_decimal()),
                entry.count.to_string(),
                format!("{:.2}", share.percentage),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        wtr.write_record([
            month,
            "TOTAL".to_string(),
            format!("{:.2}", self.total.to_decimal()),
            self.expense_count.to_string(),
            String::new(),
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample_ledger() -> Vec<ExpenseRecord> {
        let jan = YearMonth::new(2024, 1).unwrap();
        let feb = YearMonth::new(2024, 2).unwrap();
        vec![
            ExpenseRecord::new(Money::from_cents(2400), "Snacks", Category::Other, jan),
            ExpenseRecord::new(Money::from_cents(100_000), "Laptop", Category::Other, jan),
            ExpenseRecord::new(Money::from_cents(3000), "Groceries", Category::Food, feb),
        ]
    }

    #[test]
    fn test_whole_ledger_summary() {
        let summary = ExpenseSummary::generate(&sample_ledger(), None);

        assert_eq!(summary.total, Money::from_cents(105_400));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(
            summary.format_terminal("$"),
            "Total Expenses: $1054.00\n\nExpenses by Category:\nOther: $1024.00\nFood: $30.00\n"
        );
    }

    #[test]
    fn test_monthly_summary() {
        let summary =
            ExpenseSummary::generate(&sample_ledger(), Some(YearMonth::new(2024, 1).unwrap()));

        assert_eq!(summary.total, Money::from_cents(102_400));
        assert_eq!(summary.categories.len(), 1);
        assert!(summary
            .format_terminal("$")
            .starts_with("Total Expenses for 2024-01: $1024.00\n"));
    }

    #[test]
    fn test_month_without_expenses() {
        let summary =
            ExpenseSummary::generate(&sample_ledger(), Some(YearMonth::new(2099, 12).unwrap()));

        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
        assert_eq!(summary.format_terminal("$"), "No expenses found for 2099-12.\n");
    }

    #[test]
    fn test_currency_symbol() {
        let summary = ExpenseSummary::generate(&sample_ledger(), None);
        assert!(summary.format_terminal("€").contains("Food: €30.00"));
    }

    #[test]
    fn test_export_csv() {
        let summary =
            ExpenseSummary::generate(&sample_ledger(), Some(YearMonth::new(2024, 1).unwrap()));
        let mut buf = Vec::new();
        summary.export_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Month,Category,Amount,Count,Percentage");
        assert_eq!(lines[1], "2024-01,Other,1024.00,2,100.00");
        assert_eq!(lines[2], "2024-01,TOTAL,1024.00,2,");
    }
}
