//! Property-based tests for decimal parsing, formatting and rescaling.
//!
//! - Text round trip: `to_string(parse(s))` equals `s` up to insignificant leading zeros
//! - Rescale up then down is the identity
//! - Ordering agrees with the sign of the difference

use proptest::prelude::*;
use quanta_shared::types::RoundingMode;

use super::Decimal;
use crate::arithmetic::subtract;

/// Expected canonical text: no `+`, no leading integer zeros, no negative zero.
fn canonical(text: &str) -> String {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let is_zero = integer == "0" && fraction.is_none_or(|f| f.chars().all(|c| c == '0'));

    let mut out = String::new();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(integer);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Strategy for arbitrary decimals with up to 12 fraction digits.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=12).prop_map(|(significand, scale)| Decimal::new(significand, scale))
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfEven),
        Just(RoundingMode::TowardZero),
        Just(RoundingMode::AwayFromZero),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any text matching the grammar survives parse then display.
    #[test]
    fn prop_text_round_trip(text in "[+-]?[0-9]{1,40}(\\.[0-9]{1,30})?") {
        let value = Decimal::parse(&text).unwrap();
        prop_assert_eq!(value.to_string(), canonical(&text));
    }

    /// Scale equals the number of fraction digits in the text.
    #[test]
    fn prop_scale_from_text(integer in "[0-9]{1,10}", fraction in "[0-9]{1,25}") {
        let value = Decimal::parse(&format!("{integer}.{fraction}")).unwrap();
        prop_assert_eq!(value.scale() as usize, fraction.len());
    }

    /// Display output always parses back to an identical value.
    #[test]
    fn prop_display_parses_back(value in any_decimal()) {
        let reparsed = Decimal::parse(&value.to_string()).unwrap();
        prop_assert!(reparsed.is_identical(&value));
    }

    /// Adding zeros and removing them again loses nothing, whatever the mode.
    #[test]
    fn prop_rescale_up_then_down_is_identity(
        value in any_decimal(),
        extra in 0u32..10,
        mode in rounding_mode(),
    ) {
        let widened = value.rescale(value.scale() + extra, RoundingMode::HalfUp);
        prop_assert_eq!(&widened, &value);
        prop_assert!(widened.rescale(value.scale(), mode).is_identical(&value));
    }

    /// Rounding moves the value by at most one unit in the last place.
    #[test]
    fn prop_rescale_within_one_ulp(value in any_decimal(), target in 0u32..6, mode in rounding_mode()) {
        let rounded = value.rescale(target, mode);
        let diff = subtract(&rounded, &value).abs();
        prop_assert!(diff <= Decimal::new(1, target));
    }

    /// `compare` agrees with the sign of `a - b`.
    #[test]
    fn prop_compare_matches_difference(a in any_decimal(), b in any_decimal()) {
        let diff = subtract(&a, &b);
        let expected = if diff.is_zero() {
            std::cmp::Ordering::Equal
        } else if diff.is_negative() {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        };
        prop_assert_eq!(a.compare(&b), expected);
    }
}
