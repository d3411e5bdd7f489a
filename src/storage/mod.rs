//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit log that sits next to it.

pub mod file_io;
pub mod ledger;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use ledger::LedgerStore;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;

/// Owns the ledger and the audit log for one data directory
pub struct Storage {
    paths: LedgerPaths,
    pub ledger: LedgerStore,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance; nothing is loaded yet
    pub fn new(paths: LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerStore::new(paths.ledger_file(), settings.corrupt_store_policy),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load the ledger from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.ledger.load()?;
        Ok(())
    }

    /// The audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an append in the audit log
    pub fn log_append<T: Serialize>(
        &self,
        position: usize,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit
            .log(&AuditEntry::append(position, entity_name, entity))
    }

    /// Record an export in the audit log
    pub fn log_export(&self, format: &str, destination: &str) -> Result<(), LedgerError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit
            .log(&AuditEntry::export(format, destination, self.ledger.len()))
    }
}
