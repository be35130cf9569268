//! Amount allocation using the Largest Remainder Method.
//!
//! Splits are computed in integer minor units at the policy's scale:
//! 1. Round the total to the policy
//! 2. Give each share the truncated exact quotient
//! 3. Hand the leftover units, one each, to the shares with the largest
//!    dropped remainders (ties go to the earlier share)
//!
//! The shares always sum exactly to the rounded total.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use super::{Money, MoneyError};
use crate::decimal::Decimal;
use crate::policy::ScalePolicy;

impl Money {
    /// Splits the amount into `count` shares as equal as the policy's scale allows.
    ///
    /// Earlier shares receive the extra units. `count == 0` yields no shares.
    ///
    /// ```
    /// use quanta_core::money::Money;
    /// use quanta_core::policy::PolicyTable;
    ///
    /// let total = Money::parse("100.00", "USD").unwrap();
    /// let shares = total.allocate_equal(3, &PolicyTable::default().standard());
    /// let amounts: Vec<String> = shares.iter().map(|m| m.amount.to_string()).collect();
    /// assert_eq!(amounts, ["33.34", "33.33", "33.33"]);
    /// ```
    #[must_use]
    pub fn allocate_equal(&self, count: usize, policy: &ScalePolicy) -> Vec<Self> {
        if count == 0 {
            return vec![];
        }
        let weights = vec![BigInt::from(1u8); count];
        self.split_units(&weights, policy)
    }

    /// Splits the amount proportionally to `ratios`.
    ///
    /// Ratios need not sum to any particular value (percentages, weights and
    /// headcounts all work) but must be non-negative with a positive sum.
    pub fn allocate_by_ratios(
        &self,
        ratios: &[Decimal],
        policy: &ScalePolicy,
    ) -> Result<Vec<Self>, MoneyError> {
        if ratios.is_empty() || ratios.iter().any(Decimal::is_negative) {
            return Err(MoneyError::InvalidRatios);
        }

        // Common scale so every ratio becomes an integer weight
        let scale = ratios.iter().map(Decimal::scale).max().unwrap_or(0);
        let weights: Vec<BigInt> = ratios.iter().map(|r| r.significand_at(scale)).collect();
        if weights.iter().all(Zero::is_zero) {
            return Err(MoneyError::InvalidRatios);
        }

        Ok(self.split_units(&weights, policy))
    }

    /// Core of both allocations. `weights` are non-negative with a positive sum.
    fn split_units(&self, weights: &[BigInt], policy: &ScalePolicy) -> Vec<Self> {
        let rounded = policy.apply(&self.amount);
        let scale = rounded.scale();
        let total = rounded.significand().abs();
        let weight_sum: BigInt = weights.iter().sum();

        let mut shares = Vec::with_capacity(weights.len());
        let mut remainders = Vec::with_capacity(weights.len());
        for weight in weights {
            let (share, remainder) = (&total * weight).div_rem(&weight_sum);
            shares.push(share);
            remainders.push(remainder);
        }

        let allocated: BigInt = shares.iter().sum();
        let mut leftover = &total - allocated;

        // Stable sort keeps lower indices first among equal remainders
        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by(|a, b| remainders[*b].cmp(&remainders[*a]));
        for idx in order {
            if !leftover.is_positive() {
                break;
            }
            shares[idx] += 1u8;
            leftover -= 1u8;
        }

        let negative = rounded.is_negative();
        shares
            .into_iter()
            .map(|units| {
                let units = if negative { -units } else { units };
                Self::new(Decimal::from_parts(units, scale), self.currency)
            })
            .collect()
    }
}
