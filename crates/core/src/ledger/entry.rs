//! Journal entry domain types.

use quanta_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use crate::arithmetic::subtract;
use crate::decimal::Decimal;

/// Side of a ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

/// A single line of a journal entry.
///
/// Exactly one of `debit` / `credit` must be positive; the other must be zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// The account affected by this line, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// Debit amount.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount.
    #[serde(default)]
    pub credit: Decimal,
    /// Optional description for this line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl LedgerLine {
    /// Creates a debit line; the credit side is zero at the same scale.
    #[must_use]
    pub fn debit(amount: Decimal) -> Self {
        let credit = Decimal::zero(amount.scale());
        Self {
            account_id: None,
            debit: amount,
            credit,
            memo: None,
        }
    }

    /// Creates a credit line; the debit side is zero at the same scale.
    #[must_use]
    pub fn credit(amount: Decimal) -> Self {
        let debit = Decimal::zero(amount.scale());
        Self {
            account_id: None,
            debit,
            credit: amount,
            memo: None,
        }
    }

    /// Sets the account.
    #[must_use]
    pub const fn with_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Sets the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// The side carrying the amount, if exactly one side is non-zero.
    #[must_use]
    pub fn entry_type(&self) -> Option<EntryType> {
        match (self.debit.is_zero(), self.credit.is_zero()) {
            (false, true) => Some(EntryType::Debit),
            (true, false) => Some(EntryType::Credit),
            _ => None,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        subtract(&self.debit, &self.credit)
    }
}

/// An ordered set of lines posted together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Lines in posting order.
    pub lines: Vec<LedgerLine>,
}

impl JournalEntry {
    /// Creates an entry from its lines.
    #[must_use]
    pub const fn new(lines: Vec<LedgerLine>) -> Self {
        Self { lines }
    }
}

impl FromIterator<LedgerLine> for JournalEntry {
    fn from_iter<I: IntoIterator<Item = LedgerLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Exact debit and credit totals of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryTotals {
    /// Sum of debit amounts.
    pub debit: Decimal,
    /// Sum of credit amounts.
    pub credit: Decimal,
}

impl EntryTotals {
    /// Returns true if debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.debit == self.credit
    }

    /// `debit - credit`; zero when balanced.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        subtract(&self.debit, &self.credit)
    }
}
