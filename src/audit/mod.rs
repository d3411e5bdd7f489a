//! Audit logging for the expense ledger
//!
//! Records every append to the ledger and every export in an append-only,
//! line-delimited JSON log next to the settings file.
//!
//! - `AuditEntry`: one logged operation with a timestamp and a snapshot of
//!   the affected record.
//! - `AuditLogger`: writes and reads the JSONL file.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
