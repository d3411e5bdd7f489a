//! Export module for the expense ledger
//!
//! - CSV: one row per record (spreadsheet-compatible)
//! - JSON: full ledger with metadata, machine-readable
//! - YAML: same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, import_from_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
