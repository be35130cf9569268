//! Property-based tests for UOM conversion.
//!
//! - Forward then inverse conversion returns the quantity within one unit
//!   of the quantity scale for factors of at least 0.5, including factors
//!   with non-terminating inverses
//! - For any factor the round trip stays within half a unit times the
//!   inverse factor, plus one unit
//! - Reversing a conversion twice is the identity

use proptest::prelude::*;
use quanta_shared::types::UnitId;

use super::conversion::{UomConversion, convert, convert_inverse};
use super::resolver::ConversionTable;
use crate::arithmetic::{add, multiply};
use crate::decimal::Decimal;
use crate::policy::PolicyTable;

/// Factors from 0.5 to 100 with seven fraction digits, plus 3.
fn factor() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        1 => Just(Decimal::from(3)),
        9 => (5_000_000i64..=1_000_000_000i64).prop_map(|v| Decimal::new(v, 7)),
    ]
}

/// Factors from 0.0001 to 0.5 with seven fraction digits.
fn small_factor() -> impl Strategy<Value = Decimal> {
    (1_000i64..=5_000_000i64).prop_map(|v| Decimal::new(v, 7))
}

/// Quantities from 0.0001 to 1,000.0000.
fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_inverse_round_trip_within_one_unit(q in quantity(), f in factor()) {
        let table = PolicyTable::default();
        let policy = table.quantity();
        let conversion = UomConversion::new(UnitId::new(), UnitId::new(), &f, &table).unwrap();

        let forward = convert(&q, &conversion, &policy);
        let back = convert_inverse(&forward, &conversion, &policy);
        let error = (&back - &q).abs();
        prop_assert!(
            error <= Decimal::new(1, policy.scale()),
            "{} -> {} -> {} with factor {}",
            q, forward, back, f
        );
    }

    #[test]
    fn prop_small_factor_round_trip_bound(q in quantity(), f in small_factor()) {
        let table = PolicyTable::default();
        let policy = table.quantity();
        let conversion = UomConversion::new(UnitId::new(), UnitId::new(), &f, &table).unwrap();

        let forward = convert(&q, &conversion, &policy);
        let back = convert_inverse(&forward, &conversion, &policy);
        let half_unit = Decimal::new(5, policy.scale() + 1);
        let bound = add(
            &multiply(&half_unit, conversion.inverse_factor()),
            &Decimal::new(1, policy.scale()),
        );
        prop_assert!(
            (&back - &q).abs() <= bound,
            "{} -> {} -> {} with factor {}",
            q, forward, back, f
        );
    }

    #[test]
    fn prop_factor_three_round_trip(q in quantity()) {
        let table = PolicyTable::default();
        let policy = table.quantity();
        let conversion =
            UomConversion::new(UnitId::new(), UnitId::new(), &Decimal::from(3), &table).unwrap();

        let back = convert_inverse(&convert(&q, &conversion, &policy), &conversion, &policy);
        prop_assert!((&back - &q).abs() <= Decimal::new(1, policy.scale()));
    }

    #[test]
    fn prop_table_matches_free_functions(q in quantity(), f in factor()) {
        let policies = PolicyTable::default();
        let policy = policies.quantity();
        let (from, to) = (UnitId::new(), UnitId::new());
        let conversion = UomConversion::new(from, to, &f, &policies).unwrap();
        let table: ConversionTable = std::iter::once(conversion.clone()).collect();

        prop_assert_eq!(
            table.convert(&q, from, to, &policy).unwrap(),
            convert(&q, &conversion, &policy)
        );
        prop_assert_eq!(
            table.convert(&q, to, from, &policy).unwrap(),
            convert_inverse(&q, &conversion, &policy)
        );
    }

    #[test]
    fn prop_reversed_twice_is_identity(f in factor()) {
        let table = PolicyTable::default();
        let conversion = UomConversion::new(UnitId::new(), UnitId::new(), &f, &table).unwrap();
        prop_assert_eq!(conversion.reversed().reversed(), conversion);
    }
}
