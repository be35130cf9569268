//! Conversions to and from `rust_decimal::Decimal`.
//!
//! Services that already hold `rust_decimal` values can hand them in losslessly.
//! The way back is fallible: `rust_decimal` caps the significand at 96 bits and
//! the scale at 28.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use quanta_shared::AppError;
use thiserror::Error;

use super::Decimal;

/// Value does not fit the target representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteropError {
    /// Significand wider than 96 bits or scale above 28.
    #[error("Decimal {0} does not fit in a rust_decimal value")]
    OutOfRange(String),
}

impl InteropError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "DECIMAL_OUT_OF_RANGE",
        }
    }
}

impl From<InteropError> for AppError {
    fn from(err: InteropError) -> Self {
        Self::validation(err.error_code(), err.to_string())
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::from_parts(BigInt::from(value.mantissa()), value.scale())
    }
}

impl TryFrom<&Decimal> for rust_decimal::Decimal {
    type Error = InteropError;

    fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
        let out_of_range = || InteropError::OutOfRange(value.to_string());
        let mantissa = value.significand().to_i128().ok_or_else(out_of_range)?;
        Self::try_from_i128_with_scale(mantissa, value.scale()).map_err(|_| out_of_range())
    }
}

impl TryFrom<Decimal> for rust_decimal::Decimal {
    type Error = InteropError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}
