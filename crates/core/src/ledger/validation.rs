//! Double-entry invariant checks.

use tracing::{debug, trace};

use super::entry::{EntryTotals, JournalEntry, LedgerLine};
use super::error::{LedgerError, LineViolation};
use crate::arithmetic::add;
use crate::decimal::Decimal;

/// Checks that a line has exactly one positive side.
pub fn validate_line(line: &LedgerLine) -> Result<(), LineViolation> {
    if line.debit.is_negative() || line.credit.is_negative() {
        return Err(LineViolation::NegativeAmount);
    }
    match line.entry_type() {
        Some(_) => Ok(()),
        None if line.debit.is_zero() => Err(LineViolation::BothSidesZero),
        None => Err(LineViolation::BothSidesNonZero),
    }
}

/// Validates a journal entry and returns its exact totals.
///
/// Checks run in order: line count, each line, then balance. Totals are
/// summed without rounding, so `500.00` vs `499.999` is unbalanced.
pub fn validate(entry: &JournalEntry) -> Result<EntryTotals, LedgerError> {
    let count = entry.lines.len();
    if count < 2 {
        debug!(count, "Journal entry rejected: too few lines");
        return Err(LedgerError::InsufficientLines { count });
    }

    let mut debit = Decimal::default();
    let mut credit = Decimal::default();
    for (index, line) in entry.lines.iter().enumerate() {
        if let Err(reason) = validate_line(line) {
            debug!(index, %reason, "Journal entry rejected: invalid line");
            return Err(LedgerError::InvalidLine { index, reason });
        }
        debit = add(&debit, &line.debit);
        credit = add(&credit, &line.credit);
    }

    let totals = EntryTotals { debit, credit };
    if !totals.is_balanced() {
        debug!(
            debit = %totals.debit,
            credit = %totals.credit,
            "Journal entry rejected: unbalanced"
        );
        return Err(LedgerError::UnbalancedEntry {
            debit: totals.debit,
            credit: totals.credit,
        });
    }

    trace!(lines = count, total = %totals.debit, "Journal entry balanced");
    Ok(totals)
}
