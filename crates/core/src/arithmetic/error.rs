//! Arithmetic error types.

use quanta_shared::AppError;
use thiserror::Error;

/// Errors raised by decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Divisor was zero at any scale.
    #[error("Division by zero")]
    DivisionByZero,
}

impl ArithmeticError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}

impl From<ArithmeticError> for AppError {
    fn from(err: ArithmeticError) -> Self {
        Self::validation(err.error_code(), err.to_string())
    }
}
