//! Core computation for Quanta.
//!
//! This crate contains pure, exact decimal computation with ZERO web or database dependencies.
//! Nothing here performs I/O or holds shared mutable state.
//!
//! # Modules
//!
//! - `decimal` - Arbitrary-precision fixed-point numbers
//! - `arithmetic` - Exact add/subtract/multiply and explicitly scaled division
//! - `policy` - Named scale and rounding policies
//! - `money` - Currency-tagged amounts, allocation and line totals
//! - `ledger` - Double-entry invariant validation
//! - `uom` - Unit-of-measure conversion with stored inverse factors

pub mod arithmetic;
pub mod decimal;
pub mod ledger;
pub mod money;
pub mod policy;
pub mod uom;

pub use decimal::Decimal;
pub use money::Money;
pub use policy::{PolicyName, PolicyTable, ScalePolicy};
