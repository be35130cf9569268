//! Invoice and order line totals.

use quanta_shared::types::CurrencyCode;
use serde::{Deserialize, Serialize};

use super::{Money, MoneyError};
use crate::decimal::Decimal;
use crate::policy::PolicyTable;

/// A priced line: `quantity x unit_price - discount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity in the line's unit of measure.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Money,
    /// Absolute discount on the whole line, in the price currency.
    pub discount: Money,
}

impl LineItem {
    /// Creates a line with no discount.
    #[must_use]
    pub fn new(quantity: Decimal, unit_price: Money) -> Self {
        let discount = Money::zero(unit_price.currency, 0);
        Self {
            quantity,
            unit_price,
            discount,
        }
    }

    /// Sets the line discount.
    #[must_use]
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = discount;
        self
    }

    /// Currency of the line.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.unit_price.currency
    }

    /// Exact `quantity x unit_price - discount`, before rounding.
    pub fn subtotal(&self) -> Result<Money, MoneyError> {
        self.unit_price.multiply(&self.quantity).subtract(&self.discount)
    }

    /// Line total rounded with the currency's `standard` policy.
    pub fn total(&self, table: &PolicyTable) -> Result<Money, MoneyError> {
        Ok(self.subtotal()?.round(table))
    }

    /// Checks a recorded total against the recomputed one.
    pub fn verify_total(&self, recorded: &Money, table: &PolicyTable) -> Result<(), MoneyError> {
        let expected = self.total(table)?;
        if expected.compare(recorded)?.is_eq() {
            return Ok(());
        }
        Err(MoneyError::LineTotalMismatch {
            expected: expected.amount,
            recorded: recorded.amount.clone(),
            currency: expected.currency,
        })
    }
}

/// Sum of rounded line totals; every line must be in `currency`.
pub fn sum_line_totals(
    currency: CurrencyCode,
    lines: &[LineItem],
    table: &PolicyTable,
) -> Result<Money, MoneyError> {
    let totals = lines
        .iter()
        .map(|line| line.total(table))
        .collect::<Result<Vec<_>, _>>()?;
    Money::sum(currency, &totals).map(|sum| sum.round(table))
}
