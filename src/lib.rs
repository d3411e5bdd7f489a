//! Expense Ledger - record expenses and summarise where the money went
//!
//! This library keeps an append-only ledger of expense records in a JSON
//! file and derives totals, per-category breakdowns and month filters from
//! it. The `expenses` binary is a thin command-line front end over it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, money, categories and year-month dates
//! - `storage`: JSON ledger file with atomic writes
//! - `services`: Validation and recording of new expenses
//! - `reports`: Aggregation and summary reports
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
