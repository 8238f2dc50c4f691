//! Output formatting shared by the commands.

use std::io::Write;

use clap::ValueEnum;
use recipe_costing_core::{CurrencyCode, Price};
use rust_decimal::Decimal;
use serde::Serialize;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write rendered output to stdout.
///
/// # Errors
///
/// Returns an error if stdout is closed.
pub fn write_stdout(rendered: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

/// Serialize a result as pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Quantity for display: two decimals, trailing zeros dropped.
#[must_use]
pub fn quantity(value: Decimal) -> String {
    value.round_dp(2).normalize().to_string()
}

/// Amount for display in the configured currency.
#[must_use]
pub fn money(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).display()
}

/// Percentage for display with one decimal.
#[must_use]
pub fn percent(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}
