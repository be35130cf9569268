//! Boundary error type handed to calling services.
//!
//! Every core error converts into an `AppError` so that services can map it to
//! a response or a rolled-back transaction without matching each module's enum.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input (unparseable decimal, bad currency code).
    #[error("Validation error: {code}: {message}")]
    Validation {
        /// Stable error code from the originating module.
        code: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// Well-formed input that violates a business invariant.
    #[error("Business rule violation: {code}: {message}")]
    BusinessRule {
        /// Stable error code from the originating module.
        code: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds a validation error from a module error code and its message.
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Builds a business rule error from a module error code and its message.
    pub fn business_rule(code: &'static str, message: impl Into<String>) -> Self {
        Self::BusinessRule {
            code,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::BusinessRule { .. } => 422,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } | Self::BusinessRule { code, .. } => *code,
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
