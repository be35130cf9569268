//! Stored UOM conversions and quantity conversion.
//!
//! CRITICAL: The inverse factor is derived once, when the conversion is
//! built, and stored next to the forward factor. Converting back always uses
//! the stored inverse; it is never recomputed from a rounded quantity.

use quanta_shared::types::UnitId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::UomError;
use crate::arithmetic::{divide_with, multiply, subtract};
use crate::decimal::Decimal;
use crate::policy::{PolicyTable, ScalePolicy};

/// Persisted shape of a conversion.
///
/// `inverse_factor` is optional on input; when absent it is derived on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UomConversionRecord {
    /// Source unit.
    pub from_unit_id: UnitId,
    /// Target unit.
    pub to_unit_id: UnitId,
    /// `1 from = factor to`.
    pub factor: Decimal,
    /// Cached `1 / factor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_factor: Option<Decimal>,
}

/// A validated conversion with its forward and inverse factors at the rate scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UomConversion {
    from: UnitId,
    to: UnitId,
    factor: Decimal,
    inverse_factor: Decimal,
}

impl UomConversion {
    /// Builds a conversion, rounding `factor` to the rate policy and deriving its inverse.
    pub fn new(
        from: UnitId,
        to: UnitId,
        factor: &Decimal,
        table: &PolicyTable,
    ) -> Result<Self, UomError> {
        let rate = table.rate();
        let factor = checked_factor(from, to, factor, &rate)?;
        let inverse_factor = derive_inverse(&factor, &rate)?;
        Ok(Self {
            from,
            to,
            factor,
            inverse_factor,
        })
    }

    /// Rebuilds a conversion from its persisted shape.
    ///
    /// A cached inverse is kept as stored (after rounding to the rate policy)
    /// when one of the pair is within one rate-scale unit of the reciprocal of
    /// the other; a missing one is derived once.
    pub fn from_record(record: &UomConversionRecord, table: &PolicyTable) -> Result<Self, UomError> {
        let rate = table.rate();
        let from = record.from_unit_id;
        let to = record.to_unit_id;
        let factor = checked_factor(from, to, &record.factor, &rate)?;

        let inverse_factor = match &record.inverse_factor {
            Some(cached) => {
                let cached = rate.apply(cached);
                if !cached.is_positive() {
                    debug!(%from, %to, inverse = %cached, "UOM record rejected: non-positive inverse");
                    return Err(UomError::NonPositiveInverse(cached));
                }
                if !is_reciprocal(&factor, &cached, &rate)? {
                    debug!(
                        %from, %to, %factor, inverse = %cached,
                        "UOM record rejected: inconsistent inverse"
                    );
                    return Err(UomError::InconsistentInverse {
                        factor,
                        inverse: cached,
                    });
                }
                cached
            }
            None => derive_inverse(&factor, &rate)?,
        };

        Ok(Self {
            from,
            to,
            factor,
            inverse_factor,
        })
    }

    /// Persisted shape, including the stored inverse.
    #[must_use]
    pub fn to_record(&self) -> UomConversionRecord {
        UomConversionRecord {
            from_unit_id: self.from,
            to_unit_id: self.to,
            factor: self.factor.clone(),
            inverse_factor: Some(self.inverse_factor.clone()),
        }
    }

    /// The same conversion in the opposite direction, reusing the stored factors.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            factor: self.inverse_factor.clone(),
            inverse_factor: self.factor.clone(),
        }
    }

    /// Source unit.
    #[must_use]
    pub const fn from_unit(&self) -> UnitId {
        self.from
    }

    /// Target unit.
    #[must_use]
    pub const fn to_unit(&self) -> UnitId {
        self.to
    }

    /// Forward factor at the rate scale.
    #[must_use]
    pub const fn factor(&self) -> &Decimal {
        &self.factor
    }

    /// Stored inverse factor at the rate scale.
    #[must_use]
    pub const fn inverse_factor(&self) -> &Decimal {
        &self.inverse_factor
    }
}

/// Converts `quantity` from the source to the target unit.
#[must_use]
pub fn convert(quantity: &Decimal, conversion: &UomConversion, policy: &ScalePolicy) -> Decimal {
    policy.apply(&multiply(quantity, &conversion.factor))
}

/// Converts `quantity` from the target back to the source unit with the stored inverse.
#[must_use]
pub fn convert_inverse(
    quantity: &Decimal,
    conversion: &UomConversion,
    policy: &ScalePolicy,
) -> Decimal {
    policy.apply(&multiply(quantity, &conversion.inverse_factor))
}

fn checked_factor(
    from: UnitId,
    to: UnitId,
    factor: &Decimal,
    rate: &ScalePolicy,
) -> Result<Decimal, UomError> {
    if from == to {
        debug!(unit = %from, "UOM conversion rejected: same unit");
        return Err(UomError::SameUnit(from));
    }
    let factor = rate.apply(factor);
    if !factor.is_positive() {
        debug!(%from, %to, %factor, "UOM conversion rejected: non-positive factor");
        return Err(UomError::NonPositiveFactor(factor));
    }
    Ok(factor)
}

/// True if `inverse` is `1 / factor` at the rate scale, or `factor` is `1 / inverse`.
///
/// A reversed conversion persists the original factor as its inverse and
/// only passes the second check.
fn is_reciprocal(
    factor: &Decimal,
    inverse: &Decimal,
    rate: &ScalePolicy,
) -> Result<bool, UomError> {
    let one = Decimal::one();
    let ulp = Decimal::new(1, rate.scale());
    let forward = divide_with(&one, factor, rate)?;
    if subtract(inverse, &forward).abs() <= ulp {
        return Ok(true);
    }
    let backward = divide_with(&one, inverse, rate)?;
    Ok(subtract(factor, &backward).abs() <= ulp)
}

fn derive_inverse(factor: &Decimal, rate: &ScalePolicy) -> Result<Decimal, UomError> {
    let inverse = divide_with(&Decimal::one(), factor, rate)?;
    if inverse.is_zero() {
        debug!(%factor, "UOM conversion rejected: inverse underflows");
        return Err(UomError::InverseUnderflow {
            factor: factor.clone(),
            scale: rate.scale(),
        });
    }
    Ok(inverse)
}
