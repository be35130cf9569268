//! Property-based tests for money.
//!
//! - Allocations always sum to the rounded total
//! - No share differs from another by more than one unit in equal splits
//! - Currency checks are symmetric

use proptest::prelude::*;
use quanta_shared::types::CurrencyCode;

use super::{Money, MoneyError};
use crate::decimal::Decimal;
use crate::policy::PolicyTable;

fn currency() -> impl Strategy<Value = CurrencyCode> {
    prop_oneof![
        Just(CurrencyCode::USD),
        Just(CurrencyCode::EUR),
        Just(CurrencyCode::IDR),
        Just(CurrencyCode::JPY),
        Just(CurrencyCode::SGD),
    ]
}

/// Amounts from -1,000,000.000 to 1,000,000.000 with 0 to 3 fraction digits.
fn money() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..=1_000_000_000i64, 0u32..=3, currency())
        .prop_map(|(v, scale, c)| Money::new(Decimal::new(v, scale), c))
}

fn ratio() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000, 0u32..=2).prop_map(|(v, scale)| Decimal::new(v, scale))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_allocate_equal_sums_to_rounded_total(total in money(), count in 1usize..=12) {
        let table = PolicyTable::default();
        let policy = table.standard_for(total.currency);
        let shares = total.allocate_equal(count, &policy);

        prop_assert_eq!(shares.len(), count);
        let sum: Decimal = shares.iter().map(|m| &m.amount).sum();
        prop_assert_eq!(sum, total.round(&table).amount);
    }

    #[test]
    fn prop_allocate_equal_shares_differ_by_at_most_one_unit(total in money(), count in 1usize..=12) {
        let policy = PolicyTable::default().standard_for(total.currency);
        let shares = total.allocate_equal(count, &policy);
        let unit = Decimal::new(1, policy.scale());

        let max = shares.iter().map(|m| &m.amount).max().unwrap();
        let min = shares.iter().map(|m| &m.amount).min().unwrap();
        prop_assert!(max - min <= unit);
        prop_assert!(shares.iter().all(|m| m.amount.scale() == policy.scale()));
    }

    #[test]
    fn prop_allocate_by_ratios_sums_to_rounded_total(
        total in money(),
        ratios in prop::collection::vec(ratio(), 1..8),
    ) {
        let table = PolicyTable::default();
        let policy = table.standard_for(total.currency);
        match total.allocate_by_ratios(&ratios, &policy) {
            Ok(shares) => {
                prop_assert_eq!(shares.len(), ratios.len());
                let sum: Decimal = shares.iter().map(|m| &m.amount).sum();
                prop_assert_eq!(sum, total.round(&table).amount);
                for (share, ratio) in shares.iter().zip(&ratios) {
                    if ratio.is_zero() {
                        prop_assert!(share.is_zero());
                    }
                }
            }
            Err(err) => {
                prop_assert_eq!(err, MoneyError::InvalidRatios);
                prop_assert!(ratios.iter().all(Decimal::is_zero));
            }
        }
    }

    #[test]
    fn prop_currency_mismatch_is_symmetric(a in money(), b in money()) {
        prop_assert_eq!(a.add(&b).is_ok(), a.currency == b.currency);
        prop_assert_eq!(b.add(&a).is_ok(), a.currency == b.currency);
        prop_assert_eq!(a.subtract(&b).is_ok(), b.compare(&a).is_ok());
    }
}
