//! Policy table error types.

use quanta_shared::AppError;
use quanta_shared::types::{CurrencyCode, CurrencyCodeError};
use thiserror::Error;

use super::PolicyName;

/// Errors raised while building or querying a policy table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Identifier is not one of the known policies.
    #[error("Unknown scale policy: {0:?}")]
    UnknownPolicy(String),

    /// A coarser policy was configured with more digits than a finer one.
    #[error("Scale for {higher} ({higher_scale}) must not be below {lower} ({lower_scale})")]
    InconsistentScales {
        /// The policy expected to have fewer digits.
        lower: PolicyName,
        /// Its configured scale.
        lower_scale: u32,
        /// The policy expected to have at least as many digits.
        higher: PolicyName,
        /// Its configured scale.
        higher_scale: u32,
    },

    /// Override keyed by a malformed currency code.
    #[error(transparent)]
    InvalidCurrency(#[from] CurrencyCodeError),

    /// Override finer than the intermediate policy.
    #[error("Standard scale {scale} for {currency} exceeds the intermediate scale {max}")]
    CurrencyScaleTooLarge {
        /// Currency being overridden.
        currency: CurrencyCode,
        /// Requested scale.
        scale: u32,
        /// Intermediate scale.
        max: u32,
    },
}

impl PolicyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPolicy(_) => "UNKNOWN_POLICY",
            Self::InconsistentScales { .. } => "INCONSISTENT_SCALES",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::CurrencyScaleTooLarge { .. } => "CURRENCY_SCALE_TOO_LARGE",
        }
    }
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::UnknownPolicy(_) => Self::validation(err.error_code(), err.to_string()),
            _ => Self::Configuration(err.to_string()),
        }
    }
}
