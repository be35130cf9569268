//! Scale changes and the single rounding primitive shared with division.

use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use quanta_shared::types::RoundingMode;

use super::{Decimal, pow10};

/// Divides `numerator` by a non-zero `denominator`, rounding the quotient with `mode`.
///
/// Works on magnitudes so that every mode is symmetric around zero.
pub(crate) fn round_div(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    debug_assert!(!denominator.is_zero(), "round_div requires a non-zero denominator");

    let divisor = denominator.magnitude();
    let (quotient, remainder) = numerator.magnitude().div_rem(divisor);

    let bump = !remainder.is_zero()
        && match mode {
            RoundingMode::TowardZero => false,
            RoundingMode::AwayFromZero => true,
            RoundingMode::HalfUp => (&remainder * 2u32) >= *divisor,
            RoundingMode::HalfEven => match (&remainder * 2u32).cmp(divisor) {
                Ordering::Greater => true,
                Ordering::Equal => quotient.is_odd(),
                Ordering::Less => false,
            },
        };
    let magnitude = if bump { quotient + 1u32 } else { quotient };

    let sign = if numerator.is_negative() == denominator.is_negative() {
        Sign::Plus
    } else {
        Sign::Minus
    };
    BigInt::from_biguint(sign, magnitude)
}

impl Decimal {
    /// Returns the value at `target_scale`.
    ///
    /// Raising the scale appends zeros and is exact. Lowering it drops digits
    /// and resolves them with `mode`.
    #[must_use]
    pub fn rescale(&self, target_scale: u32, mode: RoundingMode) -> Self {
        match target_scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::from_parts(self.significand_at(target_scale), target_scale),
            Ordering::Less => {
                let divisor = pow10(self.scale - target_scale);
                Self::from_parts(round_div(&self.significand, &divisor, mode), target_scale)
            }
        }
    }
}
