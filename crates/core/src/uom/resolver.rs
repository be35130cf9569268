//! Resolves conversions between units from a set of stored conversions.

use std::collections::HashMap;

use quanta_shared::types::UnitId;
use tracing::debug;

use super::conversion::{UomConversion, convert, convert_inverse};
use super::error::UomError;
use crate::decimal::Decimal;
use crate::policy::ScalePolicy;

/// How a `(from, to)` pair is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Same unit; the quantity only gets rescaled.
    Identity,
    /// A conversion stored in the requested direction.
    Direct(&'a UomConversion),
    /// A conversion stored the other way, applied through its stored inverse.
    Inverse(&'a UomConversion),
}

impl Route<'_> {
    /// Applies the route to `quantity`.
    #[must_use]
    pub fn apply(&self, quantity: &Decimal, policy: &ScalePolicy) -> Decimal {
        match self {
            Self::Identity => policy.apply(quantity),
            Self::Direct(conversion) => convert(quantity, conversion, policy),
            Self::Inverse(conversion) => convert_inverse(quantity, conversion, policy),
        }
    }
}

/// Conversions keyed by `(from, to)`.
///
/// Only one direction needs to be registered per unit pair.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    conversions: HashMap<(UnitId, UnitId), UomConversion>,
}

impl ConversionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a conversion, returning the one it replaces for the same direction.
    pub fn insert(&mut self, conversion: UomConversion) -> Option<UomConversion> {
        let key = (conversion.from_unit(), conversion.to_unit());
        self.conversions.insert(key, conversion)
    }

    /// Number of stored conversions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    /// Returns true if no conversion is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    /// Finds how to get from `from` to `to`. A direct conversion wins over an inverse one.
    pub fn resolve(&self, from: UnitId, to: UnitId) -> Result<Route<'_>, UomError> {
        if from == to {
            return Ok(Route::Identity);
        }
        if let Some(conversion) = self.conversions.get(&(from, to)) {
            return Ok(Route::Direct(conversion));
        }
        if let Some(conversion) = self.conversions.get(&(to, from)) {
            return Ok(Route::Inverse(conversion));
        }
        debug!(%from, %to, "No UOM conversion registered");
        Err(UomError::NoConversion { from, to })
    }

    /// Converts `quantity` from `from` to `to`, rounded with `policy`.
    pub fn convert(
        &self,
        quantity: &Decimal,
        from: UnitId,
        to: UnitId,
        policy: &ScalePolicy,
    ) -> Result<Decimal, UomError> {
        Ok(self.resolve(from, to)?.apply(quantity, policy))
    }
}

impl FromIterator<UomConversion> for ConversionTable {
    fn from_iter<I: IntoIterator<Item = UomConversion>>(iter: I) -> Self {
        let mut table = Self::new();
        for conversion in iter {
            table.insert(conversion);
        }
        table
    }
}
