//! Money: a decimal amount tagged with a currency.
//!
//! CRITICAL: Amounts in different currencies never mix. Every binary
//! operation checks the currency first and fails with `CurrencyMismatch`;
//! there is no implicit conversion.

pub mod allocation;
pub mod error;
pub mod line;

#[cfg(test)]
mod props;

use std::cmp::Ordering;

use quanta_shared::types::CurrencyCode;
use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::decimal::Decimal;
use crate::policy::{PolicyTable, ScalePolicy};

pub use error::MoneyError;
pub use line::{LineItem, sum_line_totals};

/// Represents a monetary amount with currency.
///
/// Serialized as `{"amount": "19.99", "currency": "USD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The exact amount.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency and scale.
    #[must_use]
    pub fn zero(currency: CurrencyCode, scale: u32) -> Self {
        Self::new(Decimal::zero(scale), currency)
    }

    /// Parses an amount and a currency code from their textual forms.
    pub fn parse(amount: &str, currency: &str) -> Result<Self, MoneyError> {
        Ok(Self::new(Decimal::parse(amount)?, CurrencyCode::parse(currency)?))
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Returns true if the amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Fails unless `other` is in the same currency.
    pub fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }

    /// Exact sum of two amounts in the same currency.
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(
            arithmetic::add(&self.amount, &other.amount),
            self.currency,
        ))
    }

    /// Exact difference of two amounts in the same currency.
    pub fn subtract(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(
            arithmetic::subtract(&self.amount, &other.amount),
            self.currency,
        ))
    }

    /// Exact product with a dimensionless factor (quantity, rate, percentage).
    #[must_use]
    pub fn multiply(&self, factor: &Decimal) -> Self {
        Self::new(arithmetic::multiply(&self.amount, factor), self.currency)
    }

    /// Quotient by a dimensionless divisor, rounded with `policy`.
    pub fn divide(&self, divisor: &Decimal, policy: &ScalePolicy) -> Result<Self, MoneyError> {
        let amount = arithmetic::divide_with(&self.amount, divisor, policy)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Same amount with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(arithmetic::negate(&self.amount), self.currency)
    }

    /// Rescales the amount with an explicit policy.
    #[must_use]
    pub fn apply(&self, policy: &ScalePolicy) -> Self {
        Self::new(policy.apply(&self.amount), self.currency)
    }

    /// Rounds to the currency's `standard` policy.
    #[must_use]
    pub fn round(&self, table: &PolicyTable) -> Self {
        self.apply(&table.standard_for(self.currency))
    }

    /// Numeric comparison; amounts in different currencies are not comparable.
    pub fn compare(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.compare(&other.amount))
    }

    /// Rejects negative amounts at boundaries that require them (payments, receipts).
    ///
    /// The core never clamps; callers decide where this rule applies.
    pub fn ensure_non_negative(&self) -> Result<&Self, MoneyError> {
        if self.is_negative() {
            return Err(MoneyError::NegativeNotAllowed {
                amount: self.amount.clone(),
                currency: self.currency,
            });
        }
        Ok(self)
    }

    /// Exact sum of amounts that must all be in `currency`. The empty sum is zero.
    pub fn sum<'a, I>(currency: CurrencyCode, items: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Self::zero(currency, 0), |acc, item| acc.add(item))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
