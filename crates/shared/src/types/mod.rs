//! Common types used across the workspace.

pub mod currency;
pub mod id;
pub mod rounding;

pub use currency::{CurrencyCode, CurrencyCodeError};
pub use id::*;
pub use rounding::RoundingMode;
