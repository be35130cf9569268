//! Money error types.

use quanta_shared::AppError;
use quanta_shared::types::{CurrencyCode, CurrencyCodeError};
use thiserror::Error;

use crate::arithmetic::ArithmeticError;
use crate::decimal::{Decimal, ParseError};

/// Errors that can occur during money operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Input Errors ==========
    /// Amount text is not a valid decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseError),

    /// Currency text is not a valid code.
    #[error(transparent)]
    InvalidCurrency(#[from] CurrencyCodeError),

    // ========== Arithmetic Errors ==========
    /// Binary operation on amounts in different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: CurrencyCode,
        /// Currency of the right operand.
        right: CurrencyCode,
    },

    /// Division by a zero factor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Allocation ratios are empty, negative, or sum to zero.
    #[error("Allocation ratios must be non-negative with a positive sum")]
    InvalidRatios,

    // ========== Business Rule Errors ==========
    /// Amount must not be negative at this boundary (e.g., a payment).
    #[error("Amount cannot be negative: {amount} {currency}")]
    NegativeNotAllowed {
        /// The rejected amount.
        amount: Decimal,
        /// Its currency.
        currency: CurrencyCode,
    },

    /// Recorded line total disagrees with quantity x price - discount.
    #[error("Line total mismatch: expected {expected} {currency}, recorded {recorded}")]
    LineTotalMismatch {
        /// Total recomputed from the line.
        expected: Decimal,
        /// Total that was recorded.
        recorded: Decimal,
        /// Currency of both.
        currency: CurrencyCode,
    },
}

impl From<ArithmeticError> for MoneyError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

impl MoneyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_DECIMAL",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidRatios => "INVALID_RATIOS",
            Self::NegativeNotAllowed { .. } => "NEGATIVE_NOT_ALLOWED",
            Self::LineTotalMismatch { .. } => "LINE_TOTAL_MISMATCH",
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::InvalidAmount(_)
            | MoneyError::InvalidCurrency(_)
            | MoneyError::DivisionByZero
            | MoneyError::InvalidRatios => Self::validation(err.error_code(), err.to_string()),
            MoneyError::CurrencyMismatch { .. }
            | MoneyError::NegativeNotAllowed { .. }
            | MoneyError::LineTotalMismatch { .. } => {
                Self::business_rule(err.error_code(), err.to_string())
            }
        }
    }
}
