//! Expense service
//!
//! The one path by which records enter the ledger: a draft is validated,
//! appended, persisted and audited. Also answers listing and summary queries
//! for the presentation layer.

use tracing::{info, warn};

use crate::error::LedgerResult;
use crate::models::{ExpenseDraft, ExpenseRecord, ValidationRules, YearMonth};
use crate::reports::{filter_by_month, ExpenseSummary};
use crate::storage::Storage;

/// Service for recording and querying expenses
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
    rules: ValidationRules,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage, rules: ValidationRules) -> Self {
        Self { storage, rules }
    }

    /// Check a draft without touching the ledger
    pub fn validate(&self, draft: &ExpenseDraft) -> LedgerResult<ExpenseRecord> {
        Ok(draft.validate(&self.rules)?)
    }

    /// Validate a draft and append it to the ledger
    ///
    /// On a validation error nothing is written.
    pub fn add(&mut self, draft: &ExpenseDraft) -> LedgerResult<ExpenseRecord> {
        let record = self.validate(draft)?;

        let position = self.storage.ledger.len();
        self.storage.ledger.append(record.clone())?;
        info!(position, date = %record.date, category = %record.category, "expense recorded");

        // The ledger is already saved; a failed audit write must not undo that
        if let Err(e) = self
            .storage
            .log_append(position, Some(record.description.clone()), &record)
        {
            warn!(error = %e, "failed to write audit entry");
        }

        Ok(record)
    }

    /// Records in ledger order, optionally limited to one month and to the
    /// most recent `limit` entries
    pub fn list(&self, period: Option<YearMonth>, limit: Option<usize>) -> Vec<&ExpenseRecord> {
        let records = self.storage.ledger.records();
        let mut selected = match period {
            Some(period) => filter_by_month(records, period),
            None => records.iter().collect(),
        };

        if let Some(limit) = limit {
            let start = selected.len().saturating_sub(limit);
            selected.drain(..start);
        }
        selected
    }

    /// Summary of the whole ledger or of one month
    pub fn summary(&self, period: Option<YearMonth>) -> ExpenseSummary {
        ExpenseSummary::generate(self.storage.ledger.records(), period)
    }
}
