//! Service layer for the expense ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and auditing around every mutation.

pub mod expense;

pub use expense::ExpenseService;
