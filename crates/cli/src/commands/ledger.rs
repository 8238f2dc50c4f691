//! Journal summary command.
//!
//! # Usage
//!
//! ```bash
//! # Whole journal
//! rc-cli ledger --journal journal.yaml
//!
//! # One month
//! rc-cli ledger --journal journal.yaml --from 2024-03-01 --to 2024-03-31
//! ```
//!
//! ## Journal Format
//!
//! ```yaml
//! - id: 1
//!   date: 2024-03-01
//!   kind: income
//!   category: Sales
//!   amount: 500000
//! - id: 2
//!   date: 2024-03-02
//!   kind: expense
//!   category: Groceries
//!   description: Weekly market run
//!   amount: 120000
//! ```

use std::fmt::{self, Write as _};

use recipe_costing_core::{CurrencyCode, DateWindow, LedgerSummary};

use crate::output::money;

/// Render a journal summary as text.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_text(
    summary: &LedgerSummary,
    window: &DateWindow,
    currency: CurrencyCode,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let from = window.from.map_or_else(|| "start".to_owned(), |d| d.to_string());
    let to = window.to.map_or_else(|| "end".to_owned(), |d| d.to_string());
    writeln!(out, "Journal {from} .. {to} ({} entries)", summary.count)?;

    for total in &summary.by_category {
        let category = if total.category.is_empty() {
            "Uncategorized"
        } else {
            &total.category
        };
        writeln!(
            out,
            "  {category:<24} {:<8} {:>24}",
            total.kind,
            money(total.total, currency)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "  {:<33} {:>24}", "Total income", money(summary.total_income, currency))?;
    writeln!(out, "  {:<33} {:>24}", "Total expense", money(summary.total_expense, currency))?;
    writeln!(out, "  {:<33} {:>24}", "Net", money(summary.net, currency))?;

    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use recipe_costing_core::{Transaction, ledger};

    const JOURNAL: &str = r"
- id: 1
  date: 2024-03-01
  kind: income
  category: Sales
  amount: 500000
- id: 2
  date: 2024-03-02
  kind: expense
  amount: 120000
";

    #[test]
    fn test_render_text() {
        let journal: Vec<Transaction> = serde_yaml::from_str(JOURNAL).unwrap();
        let window = DateWindow::new(NaiveDate::from_ymd_opt(2024, 3, 1), None).unwrap();
        let summary = ledger::summarize(&journal, Some(window));

        let text = render_text(&summary, &window, CurrencyCode::IDR).unwrap();
        assert!(text.starts_with("Journal 2024-03-01 .. end (2 entries)\n"));
        assert!(text.contains("Sales"));
        assert!(text.contains("Uncategorized"));
        assert!(text.contains("expense"));
        assert!(text.contains("Rp 380000.00"));
    }
}
