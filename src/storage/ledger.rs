//! Ledger repository for JSON storage
//!
//! Manages loading and saving the expense ledger to expenses.json. The file
//! holds a bare JSON array of records in insertion order; every mutation
//! rewrites the whole file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::settings::CorruptStorePolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

use super::file_io::{quarantine, read_json, write_json_atomic};

/// Append-only store of expense records backed by a single JSON file
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    corrupt_policy: CorruptStorePolicy,
    records: Vec<ExpenseRecord>,
    /// Set while the file on disk holds records that failed to load
    rejected: bool,
}

impl LedgerStore {
    /// Create a store for the given file; nothing is read until `load`
    pub fn new(path: PathBuf, corrupt_policy: CorruptStorePolicy) -> Self {
        Self {
            path,
            corrupt_policy,
            records: Vec::new(),
            rejected: false,
        }
    }

    /// Load the ledger from disk, replacing the in-memory sequence
    ///
    /// A missing or blank file loads as an empty ledger. A file that does not
    /// parse is either rejected or quarantined, depending on the policy.
    pub fn load(&mut self) -> LedgerResult<&[ExpenseRecord]> {
        self.records = match read_json::<Vec<ExpenseRecord>, _>(&self.path) {
            Ok(records) => records,
            Err(LedgerError::CorruptStore { path, reason })
                if self.corrupt_policy == CorruptStorePolicy::Quarantine =>
            {
                let moved = quarantine(&path)?;
                warn!(
                    file = %path.display(),
                    moved_to = %moved.display(),
                    %reason,
                    "ledger file was corrupt; starting with an empty ledger"
                );
                Vec::new()
            }
            Err(e) => {
                self.rejected = e.is_corrupt_store();
                return Err(e);
            }
        };
        self.rejected = false;

        debug!(count = self.records.len(), file = %self.path.display(), "loaded ledger");
        Ok(&self.records)
    }

    /// Write the full in-memory sequence to disk
    ///
    /// Refused after a rejected load, so unreadable records are never
    /// overwritten.
    pub fn save(&self) -> LedgerResult<()> {
        if self.rejected {
            return Err(LedgerError::Storage(format!(
                "refusing to overwrite {}, which failed to load",
                self.path.display()
            )));
        }
        write_json_atomic(&self.path, &self.records)?;
        debug!(count = self.records.len(), "saved ledger");
        Ok(())
    }

    /// Append a record and persist the whole ledger
    ///
    /// If the write fails the record is dropped again, so memory never holds
    /// a record the file does not.
    pub fn append(&mut self, record: ExpenseRecord) -> LedgerResult<&[ExpenseRecord]> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(&self.records)
    }

    /// Empty the in-memory view; the file on disk is left untouched
    pub fn clear(&mut self) -> &[ExpenseRecord] {
        self.records.clear();
        &self.records
    }

    /// The current in-memory sequence, oldest first
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
