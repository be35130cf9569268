//! ISO 4217-style currency codes.
//!
//! A `CurrencyCode` is always three uppercase ASCII letters. The set of codes is
//! open: any well-formed code is accepted, scales per currency live in the
//! policy table rather than here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Three-letter uppercase currency code (e.g., "USD", "IDR").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

/// Rejected currency code text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid currency code: {0:?} (expected three uppercase letters)")]
pub struct CurrencyCodeError(pub String);

impl CurrencyCode {
    /// US Dollar
    pub const USD: Self = Self(*b"USD");
    /// Indonesian Rupiah
    pub const IDR: Self = Self(*b"IDR");
    /// Euro
    pub const EUR: Self = Self(*b"EUR");
    /// Singapore Dollar
    pub const SGD: Self = Self(*b"SGD");
    /// Japanese Yen
    pub const JPY: Self = Self(*b"JPY");

    /// Parses a code, requiring exactly `^[A-Z]{3}$`.
    pub fn parse(code: &str) -> Result<Self, CurrencyCodeError> {
        match code.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(|byte| byte.is_ascii_uppercase()) => {
                Ok(Self([*a, *b, *c]))
            }
            _ => Err(CurrencyCodeError(code.to_string())),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}
