//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency amount paired with its currency, used for display.
///
/// Costing computations work on bare [`Decimal`] amounts; a `Price` is built
/// at the edge when a figure is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupiah, dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "Rp 12500.00", "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        let amount = self.amount.round_dp(2);
        match self.currency_code {
            CurrencyCode::IDR => format!("{} {amount:.2}", self.currency_code.symbol()),
            _ => format!("{}{amount:.2}", self.currency_code.symbol()),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    IDR,
    USD,
    EUR,
    SGD,
    MYR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::IDR => "Rp",
            Self::USD => "$",
            Self::EUR => "€",
            Self::SGD => "S$",
            Self::MYR => "RM",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IDR => "IDR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::SGD => "SGD",
            Self::MYR => "MYR",
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDR" => Ok(Self::IDR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "SGD" => Ok(Self::SGD),
            "MYR" => Ok(Self::MYR),
            _ => Err(format!("unsupported currency code: {s}")),
        }
    }
}
