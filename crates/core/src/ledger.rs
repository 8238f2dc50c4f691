//! Income and expense summaries over a transaction journal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::arith;
use crate::models::{Transaction, TransactionKind};
use crate::types::TransactionId;

/// Errors found when checking a journal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Amounts are unsigned; the kind carries direction.
    #[error("transaction {0} has a negative amount")]
    NegativeAmount(TransactionId),

    /// Two entries share an ID.
    #[error("duplicate transaction id {0}")]
    DuplicateId(TransactionId),

    /// The window ends before it starts.
    #[error("date window ends ({to}) before it starts ({from})")]
    InvertedWindow {
        /// Window start.
        from: NaiveDate,
        /// Window end.
        to: NaiveDate,
    },
}

/// Inclusive date range; an open side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    /// First day included.
    pub from: Option<NaiveDate>,
    /// Last day included.
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    /// Build a window, rejecting one that ends before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvertedWindow`] when `to` is before `from`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, LedgerError> {
        if let (Some(from), Some(to)) = (from, to)
            && to < from
        {
            return Err(LedgerError::InvertedWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Total for one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// Category label.
    pub category: String,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Sum of amounts.
    pub total: Decimal,
}

/// Summary of a journal over a date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Number of entries inside the window.
    pub count: usize,
    /// Sum of income amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub net: Decimal,
    /// Per-category totals in first-seen order.
    pub by_category: Vec<CategoryTotal>,
}

/// Check a journal for negative amounts and duplicate IDs.
///
/// # Errors
///
/// Returns every problem found.
pub fn validate(transactions: &[Transaction]) -> Result<(), Vec<LedgerError>> {
    let mut errors = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for tx in transactions {
        if tx.amount < Decimal::ZERO {
            errors.push(LedgerError::NegativeAmount(tx.id));
        }
        if !seen.insert(tx.id) {
            errors.push(LedgerError::DuplicateId(tx.id));
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Summarize the entries that fall inside `window` (all entries when `None`).
#[must_use]
pub fn summarize(transactions: &[Transaction], window: Option<DateWindow>) -> LedgerSummary {
    let window = window.unwrap_or_default();
    let mut summary = LedgerSummary::default();

    for tx in transactions.iter().filter(|tx| window.contains(tx.date)) {
        summary.count += 1;
        match tx.kind {
            TransactionKind::Income => {
                summary.total_income = arith::add(summary.total_income, tx.amount);
            }
            TransactionKind::Expense => {
                summary.total_expense = arith::add(summary.total_expense, tx.amount);
            }
        }
        summary.net = arith::add(summary.net, tx.signed_amount());

        match summary
            .by_category
            .iter_mut()
            .find(|c| c.category == tx.category && c.kind == tx.kind)
        {
            Some(total) => total.total = arith::add(total.total, tx.amount),
            None => summary.by_category.push(CategoryTotal {
                category: tx.category.clone(),
                kind: tx.kind,
                total: tx.amount,
            }),
        }
    }

    summary
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn tx(id: i32, day: u32, kind: TransactionKind, category: &str, amount: i64) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            date: date(day),
            kind,
            category: category.to_owned(),
            description: String::new(),
            amount: Decimal::from(amount),
        }
    }

    fn journal() -> Vec<Transaction> {
        vec![
            tx(1, 1, TransactionKind::Income, "Sales", 500_000),
            tx(2, 2, TransactionKind::Expense, "Groceries", 120_000),
            tx(3, 10, TransactionKind::Income, "Sales", 250_000),
            tx(4, 15, TransactionKind::Expense, "Packaging", 30_000),
            tx(5, 20, TransactionKind::Expense, "Groceries", 80_000),
        ]
    }

    #[test]
    fn test_summarize_all() {
        let summary = summarize(&journal(), None);
        assert_eq!(summary.count, 5);
        assert_eq!(summary.total_income, Decimal::from(750_000));
        assert_eq!(summary.total_expense, Decimal::from(230_000));
        assert_eq!(summary.net, Decimal::from(520_000));

        let categories: Vec<&str> = summary
            .by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Sales", "Groceries", "Packaging"]);
        assert_eq!(summary.by_category[1].total, Decimal::from(200_000));
    }

    #[test]
    fn test_summarize_window_is_inclusive() {
        let window = DateWindow::new(Some(date(2)), Some(date(15))).unwrap();
        let summary = summarize(&journal(), Some(window));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_income, Decimal::from(250_000));
        assert_eq!(summary.total_expense, Decimal::from(150_000));
        assert_eq!(summary.net, Decimal::from(100_000));
    }

    #[test]
    fn test_open_ended_window() {
        let window = DateWindow::new(Some(date(16)), None).unwrap();
        let summary = summarize(&journal(), Some(window));
        assert_eq!(summary.count, 1);
        assert_eq!(summary.net, Decimal::from(-80_000));
    }

    #[test]
    fn test_inverted_window_rejected() {
        assert_eq!(
            DateWindow::new(Some(date(10)), Some(date(1))),
            Err(LedgerError::InvertedWindow {
                from: date(10),
                to: date(1)
            })
        );
    }

    #[test]
    fn test_empty_journal() {
        let summary = summarize(&[], None);
        assert_eq!(summary, LedgerSummary::default());
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let mut entries = journal();
        entries.push(tx(6, 21, TransactionKind::Expense, "Gas", -5));
        entries.push(tx(1, 22, TransactionKind::Income, "Sales", 10));

        let errors = validate(&entries).unwrap_err();
        assert_eq!(
            errors,
            vec![
                LedgerError::NegativeAmount(TransactionId::new(6)),
                LedgerError::DuplicateId(TransactionId::new(1)),
            ]
        );
        assert!(validate(&journal()).is_ok());
    }
}
