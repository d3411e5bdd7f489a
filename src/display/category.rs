//! Category display formatting

use crate::models::{Category, CategoryMode};
use crate::reports::CategoryTotals;

/// Format the known categories with their usage in the ledger
///
/// Fixed categories are always listed, used or not. Custom labels found in
/// the ledger follow under their own heading.
pub fn format_category_list(
    mode: CategoryMode,
    usage: &CategoryTotals,
    currency_symbol: &str,
) -> String {
    let custom: Vec<_> = usage
        .iter()
        .filter(|t| !Category::from(t.category.clone()).is_fixed())
        .collect();

    let name_width = Category::FIXED
        .iter()
        .map(|c| c.label().len())
        .chain(custom.iter().map(|t| t.category.chars().count()))
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str("Categories:\n");

    for (i, category) in Category::FIXED.iter().enumerate() {
        let prefix = if i == Category::FIXED.len() - 1 && custom.is_empty() {
            "└── "
        } else {
            "├── "
        };
        let used = match usage.iter().find(|t| t.category == category.label()) {
            Some(t) => format!(
                "{:>3} expense(s)  {}",
                t.count,
                t.amount.format_with_symbol(currency_symbol)
            ),
            None => "unused".to_string(),
        };
        output.push_str(&format!(
            "  {}{:name_width$}  {}\n",
            prefix,
            category.label(),
            used,
            name_width = name_width
        ));
    }

    for (i, total) in custom.iter().enumerate() {
        let prefix = if i == custom.len() - 1 { "└── " } else { "├── " };
        output.push_str(&format!(
            "  {}{:name_width$}  {:>3} expense(s)  {}  (custom)\n",
            prefix,
            total.category,
            total.count,
            total.amount.format_with_symbol(currency_symbol),
            name_width = name_width
        ));
    }

    let hint = match mode {
        CategoryMode::Fixed => "Only the categories above are accepted.",
        CategoryMode::Open => "Any other label is accepted as a custom category.",
    };
    output.push_str(&format!("\n{}\n", hint));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money, YearMonth};
    use crate::reports::by_category;

    fn records() -> Vec<ExpenseRecord> {
        let month = YearMonth::new(2024, 1).unwrap();
        vec![
            ExpenseRecord::new(Money::from_cents(3000), "Groceries", Category::Food, month),
            ExpenseRecord::new(Money::from_cents(90000), "Flat", Category::Custom("Rent".into()), month),
        ]
    }

    #[test]
    fn test_lists_fixed_and_custom() {
        let output = format_category_list(CategoryMode::Open, &by_category(&records()), "$");

        assert!(output.contains("Food"));
        assert!(output.contains("$30.00"));
        assert!(output.contains("Transportation"));
        assert!(output.contains("unused"));
        assert!(output.contains("Rent"));
        assert!(output.contains("(custom)"));
        assert!(output.contains("custom category"));
    }

    #[test]
    fn test_empty_ledger_in_fixed_mode() {
        let output =
            format_category_list(CategoryMode::Fixed, &CategoryTotals::default(), "$");

        assert_eq!(output.matches("unused").count(), 4);
        assert!(output.contains("└── Other"));
        assert!(!output.contains("(custom)"));
    }
}
