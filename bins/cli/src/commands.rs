//! Command implementations. Each returns the text printed on success.

use anyhow::{Context, Result};
use clap::ValueEnum;
use quanta_core::arithmetic::{add, divide_with, multiply, subtract};
use quanta_core::ledger::{self, JournalEntry};
use quanta_core::uom::{UomConversion, convert as convert_quantity, convert_inverse};
use quanta_core::{Decimal, PolicyTable};
use quanta_shared::types::UnitId;

/// Arithmetic operation for `calc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalcOp {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// a x b
    Mul,
    /// a / b at the chosen policy
    Div,
}

/// Parses a journal entry and returns its totals as JSON.
pub fn validate(text: &str) -> Result<String> {
    let entry: JournalEntry = serde_json::from_str(text).context("Invalid journal entry JSON")?;
    let totals = ledger::validate(&entry)?;
    Ok(serde_json::to_string_pretty(&totals)?)
}

/// Converts `quantity` forward (or backward with `inverse`) at the quantity policy.
pub fn convert(
    quantity: &Decimal,
    factor: &Decimal,
    inverse: bool,
    policies: &PolicyTable,
) -> Result<String> {
    let conversion = UomConversion::new(UnitId::new(), UnitId::new(), factor, policies)?;
    let policy = policies.quantity();
    let result = if inverse {
        convert_inverse(quantity, &conversion, &policy)
    } else {
        convert_quantity(quantity, &conversion, &policy)
    };
    Ok(result.to_string())
}

/// Evaluates `a op b`. Only `div` rounds, using the named policy.
pub fn calc(
    op: CalcOp,
    a: &Decimal,
    b: &Decimal,
    policy: &str,
    policies: &PolicyTable,
) -> Result<String> {
    let policy = policies.lookup(policy)?;
    let result = match op {
        CalcOp::Add => add(a, b),
        CalcOp::Sub => subtract(a, b),
        CalcOp::Mul => multiply(a, b),
        CalcOp::Div => divide_with(a, b, &policy)?,
    };
    Ok(result.to_string())
}
