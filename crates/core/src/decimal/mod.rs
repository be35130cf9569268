//! Exact fixed-point decimal numbers.
//!
//! CRITICAL: Never use floating-point for money or quantities.
//! A `Decimal` is `significand * 10^-scale` with an arbitrary-precision
//! significand, so no value is ever approximated by the representation itself.
//! Precision is only lost where a caller asks for it: `rescale` to a lower
//! scale, or `divide` to a target scale.

mod interop;
mod parse;
mod rounding;

#[cfg(test)]
mod props;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use interop::InteropError;
pub use parse::ParseError;
pub(crate) use rounding::round_div;

/// An immutable exact decimal number.
///
/// Equality, ordering and hashing are numeric: `1.0 == 1.00`. Use
/// [`Decimal::is_identical`] to compare representations.
#[derive(Debug, Clone, Default)]
pub struct Decimal {
    significand: BigInt,
    scale: u32,
}

/// Returns `10^exp`.
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

impl Decimal {
    /// Creates a decimal from a machine-sized significand, like `rust_decimal::Decimal::new`.
    ///
    /// `Decimal::new(1999, 2)` is `19.99`.
    #[must_use]
    pub fn new(significand: i64, scale: u32) -> Self {
        Self::from_parts(BigInt::from(significand), scale)
    }

    /// Creates a decimal from an arbitrary-precision significand and a scale.
    #[must_use]
    pub const fn from_parts(significand: BigInt, scale: u32) -> Self {
        Self { significand, scale }
    }

    /// Zero carrying the given scale (`0.0000` for scale 4).
    #[must_use]
    pub fn zero(scale: u32) -> Self {
        Self::from_parts(BigInt::zero(), scale)
    }

    /// The integer one at scale 0.
    #[must_use]
    pub fn one() -> Self {
        Self::new(1, 0)
    }

    /// Number of digits after the decimal point.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// The signed integer significand.
    #[must_use]
    pub const fn significand(&self) -> &BigInt {
        &self.significand
    }

    /// Returns true if the value is zero at any scale.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    /// Returns true if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.significand.is_negative()
    }

    /// Returns true if the value is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.significand.is_positive()
    }

    /// Absolute value, keeping the scale.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.significand.abs(), self.scale)
    }

    /// Returns true if both significand and scale match.
    ///
    /// `19.90` and `19.9` are equal but not identical.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.scale == other.scale && self.significand == other.significand
    }

    /// Strips trailing fractional zeros: `12.3400` becomes `12.34`, `5.00` becomes `5`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.significand.is_zero() {
            return Self::zero(0);
        }
        let ten = BigInt::from(10u8);
        let mut significand = self.significand.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (quotient, remainder) = significand.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            significand = quotient;
            scale -= 1;
        }
        Self::from_parts(significand, scale)
    }

    /// Compares numeric values regardless of scale.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Significand expressed at a scale at least as large as `self.scale`.
    pub(crate) fn significand_at(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale, "significand_at cannot drop digits");
        if scale == self.scale {
            self.significand.clone()
        } else {
            &self.significand * pow10(scale - self.scale)
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.significand.cmp(&other.significand);
        }
        let scale = self.scale.max(other.scale);
        self.significand_at(scale)
            .cmp(&other.significand_at(scale))
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.significand.hash(state);
        normalized.scale.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.significand.magnitude().to_string();
        if self.significand.is_negative() {
            f.write_str("-")?;
        }
        if self.scale == 0 {
            return f.write_str(&digits);
        }

        let scale = usize::try_from(self.scale).map_err(|_| fmt::Error)?;
        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{integer}.{fraction}")
    }
}

macro_rules! from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Decimal {
                fn from(value: $int) -> Self {
                    Self::from_parts(BigInt::from(value), 0)
                }
            }
        )*
    };
}

from_integer!(i32, i64, u32, u64);

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
