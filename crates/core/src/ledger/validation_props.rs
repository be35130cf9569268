//! Property-based tests for journal entry validation.
//!
//! - A well-formed entry validates iff exact debit and credit totals match
//! - Lines with both sides set, both sides zero, or a negative side are rejected

use proptest::prelude::*;

use super::entry::{JournalEntry, LedgerLine};
use super::error::{LedgerError, LineViolation};
use super::validation::validate;
use crate::arithmetic::sum;
use crate::decimal::Decimal;

/// Amounts from 0.001 to 1,000,000.000 at scale 0 to 3.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..=3).prop_map(|(v, scale)| Decimal::new(v, scale))
}

/// One-sided lines.
fn valid_line() -> impl Strategy<Value = LedgerLine> {
    (positive_amount(), any::<bool>()).prop_map(|(amount, is_debit)| {
        if is_debit {
            LedgerLine::debit(amount)
        } else {
            LedgerLine::credit(amount)
        }
    })
}

/// A balanced entry: random debits closed by one credit for their sum.
fn balanced_entry() -> impl Strategy<Value = JournalEntry> {
    prop::collection::vec(positive_amount(), 1..8).prop_map(|debits| {
        let total = sum(&debits);
        debits
            .into_iter()
            .map(LedgerLine::debit)
            .chain(std::iter::once(LedgerLine::credit(total)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_balanced_iff_totals_equal(lines in prop::collection::vec(valid_line(), 2..10)) {
        let debit = sum(lines.iter().map(|l| &l.debit));
        let credit = sum(lines.iter().map(|l| &l.credit));
        let result = validate(&JournalEntry::new(lines));

        if debit == credit {
            let totals = result.unwrap();
            prop_assert_eq!(totals.debit, debit);
            prop_assert_eq!(totals.credit, credit);
        } else {
            prop_assert_eq!(result, Err(LedgerError::UnbalancedEntry { debit, credit }));
        }
    }

    #[test]
    fn prop_balanced_entry_validates(entry in balanced_entry()) {
        let totals = validate(&entry).unwrap();
        prop_assert!(totals.difference().is_zero());
    }

    /// Moving any line by one smallest unit unbalances the entry.
    #[test]
    fn prop_one_unit_off_is_unbalanced(entry in balanced_entry(), pick in any::<prop::sample::Index>()) {
        let mut entry = entry;
        let index = pick.index(entry.lines.len());
        let line = &mut entry.lines[index];
        if line.debit.is_zero() {
            line.credit = &line.credit + &Decimal::new(1, line.credit.scale());
        } else {
            line.debit = &line.debit + &Decimal::new(1, line.debit.scale());
        }
        let is_unbalanced = matches!(validate(&entry), Err(LedgerError::UnbalancedEntry { .. }));
        prop_assert!(is_unbalanced);
    }

    #[test]
    fn prop_two_sided_line_rejected(
        entry in balanced_entry(),
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        let mut entry = entry;
        let index = entry.lines.len();
        entry.lines.push(LedgerLine { debit, credit, ..LedgerLine::debit(Decimal::default()) });
        prop_assert_eq!(
            validate(&entry),
            Err(LedgerError::InvalidLine { index, reason: LineViolation::BothSidesNonZero })
        );
    }

    #[test]
    fn prop_zero_line_rejected(entry in balanced_entry(), scale in 0u32..=4) {
        let mut entry = entry;
        entry.lines.insert(0, LedgerLine::debit(Decimal::zero(scale)));
        prop_assert_eq!(
            validate(&entry),
            Err(LedgerError::InvalidLine { index: 0, reason: LineViolation::BothSidesZero })
        );
    }

    #[test]
    fn prop_negative_line_rejected(entry in balanced_entry(), amount in positive_amount()) {
        let mut entry = entry;
        entry.lines.push(LedgerLine::credit(-amount));
        let index = entry.lines.len() - 1;
        prop_assert_eq!(
            validate(&entry),
            Err(LedgerError::InvalidLine { index, reason: LineViolation::NegativeAmount })
        );
    }
}
