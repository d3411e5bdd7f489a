//! Reports module for the expense ledger
//!
//! `aggregate` holds the pure aggregation functions; `summary` packages their
//! output for display and export.

pub mod aggregate;
pub mod summary;

pub use aggregate::{
    by_category, filter_by_month, total_of, CategoryShare, CategoryTotal, CategoryTotals,
};
pub use summary::ExpenseSummary;
