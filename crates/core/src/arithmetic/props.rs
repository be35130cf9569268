//! Property-based tests for decimal arithmetic.
//!
//! - Addition and multiplication are commutative and associative
//! - Subtraction undoes addition exactly
//! - Division followed by multiplication lands within rounding distance

use proptest::prelude::*;
use quanta_shared::types::RoundingMode;

use super::{add, divide, multiply, subtract};
use crate::decimal::Decimal;

/// Amounts from -10,000,000.0000 to 10,000,000.0000 at a fixed scale.
fn amount_at(scale: u32) -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(move |v| Decimal::new(v, scale))
}

/// Amounts with a random scale between 0 and 8.
fn mixed_scale_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=8)
        .prop_map(|(v, scale)| Decimal::new(v, scale))
}

/// Non-zero divisors with magnitude at most 2, at scale 0 to 6.
fn small_divisor() -> impl Strategy<Value = Decimal> {
    (0u32..=6).prop_flat_map(|scale| {
        let max = 2 * 10i64.pow(scale);
        (1i64..=max, any::<bool>())
            .prop_map(move |(v, negative)| Decimal::new(if negative { -v } else { v }, scale))
    })
}

/// Non-zero divisors of any magnitude.
fn any_divisor() -> impl Strategy<Value = Decimal> {
    mixed_scale_amount().prop_filter("divisor must be non-zero", |v| !v.is_zero())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_add_commutative_same_scale(a in amount_at(4), b in amount_at(4)) {
        prop_assert!(add(&a, &b).is_identical(&add(&b, &a)));
    }

    #[test]
    fn prop_add_associative_same_scale(a in amount_at(2), b in amount_at(2), c in amount_at(2)) {
        let left = add(&add(&a, &b), &c);
        let right = add(&a, &add(&b, &c));
        prop_assert!(left.is_identical(&right));
    }

    #[test]
    fn prop_add_commutative_associative_mixed(
        a in mixed_scale_amount(),
        b in mixed_scale_amount(),
        c in mixed_scale_amount(),
    ) {
        prop_assert!(add(&a, &b).is_identical(&add(&b, &a)));
        prop_assert!(add(&add(&a, &b), &c).is_identical(&add(&a, &add(&b, &c))));
    }

    #[test]
    fn prop_multiply_commutative(a in mixed_scale_amount(), b in mixed_scale_amount()) {
        prop_assert!(multiply(&a, &b).is_identical(&multiply(&b, &a)));
    }

    #[test]
    fn prop_multiply_associative(
        a in mixed_scale_amount(),
        b in mixed_scale_amount(),
        c in mixed_scale_amount(),
    ) {
        let left = multiply(&multiply(&a, &b), &c);
        let right = multiply(&a, &multiply(&b, &c));
        prop_assert!(left.is_identical(&right));
    }

    /// `(a + b) - b == a` with no drift, even across scales.
    #[test]
    fn prop_subtract_undoes_add(a in mixed_scale_amount(), b in mixed_scale_amount()) {
        prop_assert_eq!(subtract(&add(&a, &b), &b), a);
    }

    /// Multiplication distributes over addition exactly.
    #[test]
    fn prop_multiply_distributes(
        a in mixed_scale_amount(),
        b in mixed_scale_amount(),
        c in mixed_scale_amount(),
    ) {
        let left = multiply(&a, &add(&b, &c));
        let right = add(&multiply(&a, &b), &multiply(&a, &c));
        prop_assert_eq!(left, right);
    }

    /// For divisors with |b| <= 2, `divide(a, b, s) * b` is within one ulp of `a` at scale `s`.
    #[test]
    fn prop_divide_then_multiply_within_one_ulp(
        a in mixed_scale_amount(),
        b in small_divisor(),
        scale in 2u32..=10,
    ) {
        let quotient = divide(&a, &b, scale, RoundingMode::HalfUp).unwrap();
        let back = multiply(&quotient, &b);
        let error = subtract(&back, &a).abs();
        prop_assert!(
            error <= Decimal::new(1, scale),
            "{} / {} = {} at scale {}, times divisor = {}",
            a, b, quotient, scale, back
        );
    }

    /// In general the error is bounded by half an ulp scaled by the divisor.
    #[test]
    fn prop_divide_error_bounded_by_divisor(
        a in mixed_scale_amount(),
        b in any_divisor(),
        scale in 0u32..=10,
    ) {
        let quotient = divide(&a, &b, scale, RoundingMode::HalfUp).unwrap();
        let error = subtract(&multiply(&quotient, &b), &a).abs();
        let bound = multiply(&b.abs(), &Decimal::new(5, scale + 1));
        prop_assert!(error <= bound);
    }

    /// Truncating division never overshoots the exact quotient in magnitude.
    #[test]
    fn prop_truncating_divide_never_overshoots(
        a in mixed_scale_amount(),
        b in any_divisor(),
        scale in 0u32..=6,
    ) {
        let quotient = divide(&a, &b, scale, RoundingMode::TowardZero).unwrap();
        let product = multiply(&quotient, &b);
        prop_assert!(product.abs() <= a.abs());
    }
}
