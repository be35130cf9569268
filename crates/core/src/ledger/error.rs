//! Ledger error types.

use quanta_shared::AppError;
use thiserror::Error;

use crate::decimal::Decimal;

/// Why a single line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineViolation {
    /// Both debit and credit carry an amount.
    #[error("line must specify either debit or credit, not both")]
    BothSidesNonZero,

    /// Neither side carries an amount.
    #[error("line must have a non-zero debit or credit")]
    BothSidesZero,

    /// A side is below zero.
    #[error("line amounts cannot be negative")]
    NegativeAmount,
}

/// Errors that can occur while validating a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Entry must have at least 2 lines.
    #[error("Journal entry must have at least 2 lines, got {count}")]
    InsufficientLines {
        /// Number of lines supplied.
        count: usize,
    },

    /// A line breaks the one-sided rule.
    #[error("Line {index}: {reason}")]
    InvalidLine {
        /// Zero-based position of the line.
        index: usize,
        /// What is wrong with it.
        reason: LineViolation,
    },

    /// Entry is not balanced (debits != credits).
    #[error("Journal entry is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedEntry {
        /// Exact debit total.
        debit: Decimal,
        /// Exact credit total.
        credit: Decimal,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientLines { .. } => "INSUFFICIENT_LINES",
            Self::InvalidLine { .. } => "INVALID_LINE",
            Self::UnbalancedEntry { .. } => "UNBALANCED_ENTRY",
        }
    }

    /// Returns true if this is a validation error (client error).
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::InsufficientLines { .. } | Self::InvalidLine { .. })
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        if err.is_validation_error() {
            Self::validation(err.error_code(), err.to_string())
        } else {
            Self::business_rule(err.error_code(), err.to_string())
        }
    }
}
