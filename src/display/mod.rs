//! Display formatting for terminal output
//!
//! Plain-text tables and charts built from ledger records and reports.

pub mod category;
pub mod chart;
pub mod expense;
pub mod report;

pub use category::format_category_list;
pub use chart::{format_chart, DEFAULT_CHART_WIDTH};
pub use expense::{format_expense_list, format_expense_row};
