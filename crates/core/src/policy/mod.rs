//! Named rounding and scale policies.
//!
//! Call sites pick a policy by name (`standard`, `intermediate`, `rate`,
//! `quantity`) instead of passing literal scales, so every module rounds the
//! same semantic category the same way.
//!
//! | Policy | Default scale | Used for |
//! |--------|---------------|----------|
//! | `standard` | 2 (per currency) | Final monetary amounts |
//! | `intermediate` | 8 | Products before final rounding |
//! | `rate` | 10 | Conversion factors and their inverses |
//! | `quantity` | 4 | Stock quantities after UOM conversion |

pub mod error;

use std::collections::BTreeMap;

use quanta_shared::PrecisionConfig;
use quanta_shared::types::{CurrencyCode, RoundingMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Decimal;

pub use error::PolicyError;

/// ISO 4217 minor units for currencies that do not use two decimals.
const BUILTIN_MINOR_UNITS: &[(&str, u32)] = &[
    ("JPY", 0),
    ("KRW", 0),
    ("IDR", 0),
    ("VND", 0),
    ("CLP", 0),
    ("BHD", 3),
    ("JOD", 3),
    ("KWD", 3),
    ("OMR", 3),
    ("TND", 3),
];

/// Stable policy identifiers shared with calling services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyName {
    /// Final monetary amounts.
    Standard,
    /// Intermediate products kept precise across multi-step calculations.
    Intermediate,
    /// Conversion factors and exchange rates.
    Rate,
    /// Quantities in a unit of measure.
    Quantity,
}

impl PolicyName {
    /// Every policy name, in table order.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Intermediate, Self::Rate, Self::Quantity];

    /// Returns the stable string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Intermediate => "intermediate",
            Self::Rate => "rate",
            Self::Quantity => "quantity",
        }
    }
}

impl std::fmt::Display for PolicyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PolicyName {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PolicyError::UnknownPolicy(s.to_string()))
    }
}

/// A named `(scale, rounding mode)` pair.
///
/// Only a [`PolicyTable`] hands these out, so a scale always traces back to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalePolicy {
    name: PolicyName,
    scale: u32,
    rounding: RoundingMode,
}

impl ScalePolicy {
    pub(crate) const fn new(name: PolicyName, scale: u32, rounding: RoundingMode) -> Self {
        Self {
            name,
            scale,
            rounding,
        }
    }

    /// The policy this pair belongs to.
    #[must_use]
    pub const fn name(&self) -> PolicyName {
        self.name
    }

    /// Target number of fraction digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Rounding mode used when digits are dropped.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Rescales `value` to this policy.
    #[must_use]
    pub fn apply(&self, value: &Decimal) -> Decimal {
        value.rescale(self.scale, self.rounding)
    }
}

/// Lookup table from policy name (and currency, for `standard`) to [`ScalePolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    standard: ScalePolicy,
    intermediate: ScalePolicy,
    rate: ScalePolicy,
    quantity: ScalePolicy,
    currency_scales: BTreeMap<CurrencyCode, u32>,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::build(&PrecisionConfig::default(), BTreeMap::new())
    }
}

impl PolicyTable {
    /// Builds a table from configuration.
    ///
    /// Scales must not decrease from `standard` to `intermediate` to `rate`,
    /// and currency overrides may not exceed the intermediate scale. Override
    /// keys are case-folded because configuration sources lowercase them.
    pub fn from_config(config: &PrecisionConfig) -> Result<Self, PolicyError> {
        let ordered = [
            (PolicyName::Standard, config.standard_scale),
            (PolicyName::Intermediate, config.intermediate_scale),
            (PolicyName::Rate, config.rate_scale),
        ];
        for pair in ordered.windows(2) {
            let (lower, lower_scale) = pair[0];
            let (higher, higher_scale) = pair[1];
            if higher_scale < lower_scale {
                return Err(PolicyError::InconsistentScales {
                    lower,
                    lower_scale,
                    higher,
                    higher_scale,
                });
            }
        }

        let mut overrides = BTreeMap::new();
        for (code, scale) in &config.currency_scales {
            let currency = CurrencyCode::parse(&code.to_ascii_uppercase())?;
            if *scale > config.intermediate_scale {
                return Err(PolicyError::CurrencyScaleTooLarge {
                    currency,
                    scale: *scale,
                    max: config.intermediate_scale,
                });
            }
            overrides.insert(currency, *scale);
        }

        let table = Self::build(config, overrides);
        debug!(
            standard = table.standard.scale,
            intermediate = table.intermediate.scale,
            rate = table.rate.scale,
            quantity = table.quantity.scale,
            rounding = %config.rounding,
            currency_overrides = table.currency_scales.len(),
            "Policy table built"
        );
        Ok(table)
    }

    fn build(config: &PrecisionConfig, overrides: BTreeMap<CurrencyCode, u32>) -> Self {
        let mut currency_scales: BTreeMap<CurrencyCode, u32> = BUILTIN_MINOR_UNITS
            .iter()
            .filter_map(|(code, scale)| CurrencyCode::parse(code).ok().map(|c| (c, *scale)))
            .collect();
        currency_scales.extend(overrides);

        let rounding = config.rounding;
        Self {
            standard: ScalePolicy::new(PolicyName::Standard, config.standard_scale, rounding),
            intermediate: ScalePolicy::new(
                PolicyName::Intermediate,
                config.intermediate_scale,
                rounding,
            ),
            rate: ScalePolicy::new(PolicyName::Rate, config.rate_scale, rounding),
            quantity: ScalePolicy::new(PolicyName::Quantity, config.quantity_scale, rounding),
            currency_scales,
        }
    }

    /// Returns the policy for `name`. `standard` here is the currency-neutral default.
    #[must_use]
    pub const fn get(&self, name: PolicyName) -> ScalePolicy {
        match name {
            PolicyName::Standard => self.standard,
            PolicyName::Intermediate => self.intermediate,
            PolicyName::Rate => self.rate,
            PolicyName::Quantity => self.quantity,
        }
    }

    /// Looks a policy up by its string identifier.
    pub fn lookup(&self, name: &str) -> Result<ScalePolicy, PolicyError> {
        Ok(self.get(name.parse()?))
    }

    /// Currency-neutral `standard` policy.
    #[must_use]
    pub const fn standard(&self) -> ScalePolicy {
        self.standard
    }

    /// `intermediate` policy.
    #[must_use]
    pub const fn intermediate(&self) -> ScalePolicy {
        self.intermediate
    }

    /// `rate` policy.
    #[must_use]
    pub const fn rate(&self) -> ScalePolicy {
        self.rate
    }

    /// `quantity` policy.
    #[must_use]
    pub const fn quantity(&self) -> ScalePolicy {
        self.quantity
    }

    /// `standard` policy for amounts in `currency`.
    #[must_use]
    pub fn standard_for(&self, currency: CurrencyCode) -> ScalePolicy {
        match self.currency_scales.get(&currency) {
            Some(scale) => ScalePolicy::new(PolicyName::Standard, *scale, self.standard.rounding),
            None => self.standard,
        }
    }
}
