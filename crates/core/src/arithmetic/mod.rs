//! Pure arithmetic over [`Decimal`].
//!
//! Addition, subtraction and multiplication are exact and never round.
//! Division is the only lossy operation and always takes an explicit target
//! scale and rounding mode, either directly or through a [`ScalePolicy`],
//! so there is no `Div` operator.

pub mod error;

#[cfg(test)]
mod props;

use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;
use quanta_shared::types::RoundingMode;

use crate::decimal::{Decimal, pow10, round_div};
use crate::policy::ScalePolicy;

pub use error::ArithmeticError;

/// Exact sum at `max(a.scale, b.scale)`.
#[must_use]
pub fn add(a: &Decimal, b: &Decimal) -> Decimal {
    let scale = a.scale().max(b.scale());
    Decimal::from_parts(a.significand_at(scale) + b.significand_at(scale), scale)
}

/// Exact difference at `max(a.scale, b.scale)`.
#[must_use]
pub fn subtract(a: &Decimal, b: &Decimal) -> Decimal {
    let scale = a.scale().max(b.scale());
    Decimal::from_parts(a.significand_at(scale) - b.significand_at(scale), scale)
}

/// Exact product at `a.scale + b.scale`.
///
/// The result is never rounded; apply a policy afterwards if the scale matters.
#[must_use]
pub fn multiply(a: &Decimal, b: &Decimal) -> Decimal {
    Decimal::from_parts(a.significand() * b.significand(), a.scale() + b.scale())
}

/// Quotient `a / b` at `target_scale`, rounded once with `mode`.
///
/// The rounding decision is taken on the exact remainder, so the result is
/// the correctly rounded quotient rather than a rounding of a rounding.
pub fn divide(
    a: &Decimal,
    b: &Decimal,
    target_scale: u32,
    mode: RoundingMode,
) -> Result<Decimal, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    // a / b = (A * 10^sb) / (B * 10^sa); shift by 10^target to land on the target scale.
    let numerator = a.significand() * pow10(target_scale + b.scale());
    let denominator = b.significand() * pow10(a.scale());

    Ok(Decimal::from_parts(
        round_div(&numerator, &denominator, mode),
        target_scale,
    ))
}

/// [`divide`] using the scale and rounding mode of a named policy.
pub fn divide_with(
    a: &Decimal,
    b: &Decimal,
    policy: &ScalePolicy,
) -> Result<Decimal, ArithmeticError> {
    divide(a, b, policy.scale(), policy.rounding())
}

/// Exact sum of any number of values. The empty sum is `0`.
pub fn sum<'a, I>(values: I) -> Decimal
where
    I: IntoIterator<Item = &'a Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::zero(0), |acc, value| add(&acc, value))
}

/// Same value with the opposite sign.
#[must_use]
pub fn negate(value: &Decimal) -> Decimal {
    if value.significand().is_zero() {
        return value.clone();
    }
    Decimal::from_parts(-value.significand(), value.scale())
}

macro_rules! forward_binop {
    ($op:ident, $method:ident, $func:path) => {
        impl $op<&Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                $func(self, rhs)
            }
        }

        impl $op<Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                $func(&self, &rhs)
            }
        }

        impl $op<&Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                $func(&self, rhs)
            }
        }

        impl $op<Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                $func(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, crate::arithmetic::add);
forward_binop!(Sub, sub, crate::arithmetic::subtract);
forward_binop!(Mul, mul, crate::arithmetic::multiply);

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        negate(&self)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        negate(self)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(0), |acc, value| add(&acc, &value))
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        sum(iter)
    }
}
