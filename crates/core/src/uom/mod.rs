//! Unit-of-measure conversion.
//!
//! A conversion stores `factor` (`1 from = factor to`) and its inverse, both
//! at the `rate` policy scale. Quantities are rounded with the caller's
//! policy, normally `quantity`.
//!
//! A forward then inverse conversion is off by at most half a unit of the
//! quantity scale times `inverse_factor`, plus half a unit for the second
//! rounding. Both ends are whole units, so for factors above about 1/3 the
//! round trip is within one unit. Smaller factors can drift further
//! (factor `0.25` at scale 4 takes `0.0002` to `0.0001` and back to `0.0004`),
//! so convert those at a finer policy such as `intermediate` and round once at
//! the end.

pub mod conversion;
pub mod error;
pub mod resolver;

#[cfg(test)]
mod props;

pub use conversion::{UomConversion, UomConversionRecord, convert, convert_inverse};
pub use error::UomError;
pub use resolver::{ConversionTable, Route};
