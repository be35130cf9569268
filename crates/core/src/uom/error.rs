//! Unit-of-measure conversion error types.

use quanta_shared::AppError;
use quanta_shared::types::UnitId;
use thiserror::Error;

use crate::arithmetic::ArithmeticError;
use crate::decimal::Decimal;

/// Errors that can occur while building or resolving UOM conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UomError {
    /// Source and target units must be different.
    #[error("Source and target units must be different: {0}")]
    SameUnit(UnitId),

    /// Conversion factor must be positive at the rate scale.
    #[error("Conversion factor must be positive, got {0}")]
    NonPositiveFactor(Decimal),

    /// Stored inverse factor must be positive.
    #[error("Stored inverse factor must be positive, got {0}")]
    NonPositiveInverse(Decimal),

    /// Stored inverse factor is more than one rate-scale unit away from `1 / factor`.
    #[error("Stored inverse factor {inverse} does not match factor {factor}")]
    InconsistentInverse {
        /// The forward factor.
        factor: Decimal,
        /// The stored inverse, at the rate scale.
        inverse: Decimal,
    },

    /// Factor is so large that its inverse rounds to zero at the rate scale.
    #[error("Inverse of factor {factor} is zero at scale {scale}")]
    InverseUnderflow {
        /// The forward factor.
        factor: Decimal,
        /// Rate scale used for the inverse.
        scale: u32,
    },

    /// No conversion registered between the units, in either direction.
    #[error("No conversion from {from} to {to}")]
    NoConversion {
        /// Requested source unit.
        from: UnitId,
        /// Requested target unit.
        to: UnitId,
    },

    /// Arithmetic failure while deriving the inverse.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl UomError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SameUnit(_) => "SAME_UNIT_CONVERSION",
            Self::NonPositiveFactor(_) => "NON_POSITIVE_FACTOR",
            Self::NonPositiveInverse(_) => "NON_POSITIVE_INVERSE",
            Self::InconsistentInverse { .. } => "INCONSISTENT_INVERSE",
            Self::InverseUnderflow { .. } => "INVERSE_UNDERFLOW",
            Self::NoConversion { .. } => "NO_CONVERSION",
            Self::Arithmetic(err) => err.error_code(),
        }
    }
}

impl From<UomError> for AppError {
    fn from(err: UomError) -> Self {
        match err {
            UomError::NoConversion { .. } => Self::business_rule(err.error_code(), err.to_string()),
            _ => Self::validation(err.error_code(), err.to_string()),
        }
    }
}
