//! Proportional category chart
//!
//! Text rendering of the category shares: one bar per category, scaled so
//! the bars together fill the chart width.

use crate::reports::CategoryShare;

use super::report::{format_bar, format_percentage, truncate};

/// Default bar width in cells
pub const DEFAULT_CHART_WIDTH: usize = 30;

/// Render one bar per share, in the order given
pub fn format_chart(shares: &[CategoryShare], currency_symbol: &str, width: usize) -> String {
    if shares.is_empty() {
        return "Nothing to chart.\n".to_string();
    }

    let label_width = shares
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0)
        .min(18);

    let mut output = String::new();
    for share in shares {
        output.push_str(&format!(
            "{:label_width$}  {}  {:>6}  {}\n",
            truncate(&share.category, label_width),
            format_bar(share.percentage, width),
            format_percentage(share.percentage),
            share.amount.format_with_symbol(currency_symbol),
            label_width = label_width
        ));
    }

    output
}
