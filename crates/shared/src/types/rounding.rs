//! Rounding modes applied when a decimal loses scale.

use serde::{Deserialize, Serialize};

/// How to resolve digits dropped by a scale reduction.
///
/// The mode names follow the direction applied to the magnitude, so
/// `-2.5` with `HalfUp` becomes `-3` (half away from zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero. Used for final amounts.
    #[default]
    HalfUp,
    /// Round to nearest, ties to the even neighbour (banker's rounding).
    HalfEven,
    /// Drop the extra digits (truncate). Used by tiered pricing and tax.
    TowardZero,
    /// Any non-zero remainder bumps the magnitude.
    AwayFromZero,
}

impl RoundingMode {
    /// Returns the stable identifier used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfUp => "half_up",
            Self::HalfEven => "half_even",
            Self::TowardZero => "toward_zero",
            Self::AwayFromZero => "away_from_zero",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half_up" => Ok(Self::HalfUp),
            "half_even" => Ok(Self::HalfEven),
            "toward_zero" | "truncate" => Ok(Self::TowardZero),
            "away_from_zero" => Ok(Self::AwayFromZero),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}
