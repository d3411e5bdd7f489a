//! Core data models for the expense ledger
//!
//! This module contains the data structures that make up a ledger: the
//! record itself, its money amount, category and year-month date.

pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use category::{Category, CategoryMode, UnknownCategory};
pub use expense::{AmountPolicy, ExpenseDraft, ExpenseRecord, ValidationError, ValidationRules};
pub use money::{Money, MoneyParseError};
pub use period::{PeriodParseError, YearMonth};
