//! Double-entry invariant validation.
//!
//! This module implements the ledger checks applied before a journal entry
//! is handed to persistence:
//! - Journal entry and line types
//! - Per-line one-sided rule
//! - Exact debit/credit balance
//! - Error types for ledger violations

pub mod entry;
pub mod error;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{EntryTotals, EntryType, JournalEntry, LedgerLine};
pub use error::{LedgerError, LineViolation};
pub use validation::{validate, validate_line};
