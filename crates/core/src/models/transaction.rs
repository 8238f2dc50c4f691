//! Bookkeeping journal entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::TransactionId;

/// Direction of money for a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => f.pad("income"),
            Self::Expense => f.pad("expense"),
        }
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// Date the money moved.
    pub date: NaiveDate,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Grouping label (e.g. "Sales", "Groceries").
    #[serde(default)]
    pub category: String,
    /// Optional note.
    #[serde(default)]
    pub description: String,
    /// Amount, always non-negative; `kind` carries the sign.
    pub amount: Decimal,
}

impl Transaction {
    /// Amount with the sign implied by `kind` (expenses negative).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
