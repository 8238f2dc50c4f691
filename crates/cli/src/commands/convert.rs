//! Unit conversion command.
//!
//! # Usage
//!
//! ```bash
//! # 2 kilograms in grams
//! rc-cli convert 2 Kg Gram
//!
//! # 3 tablespoons in millilitres, as JSON
//! rc-cli convert 3 Sdm ML --format json
//! ```

use recipe_costing_core::{Unit, convert_rate};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::output::{self, OutputFormat};

/// Errors that can occur during conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// No conversion exists between the two units.
    #[error("cannot convert {from} to {to}: unknown unit or piece/measure mismatch")]
    Unconvertible {
        /// Source unit.
        from: String,
        /// Target unit.
        to: String,
    },

    /// The converted quantity does not fit in a decimal.
    #[error("{quantity} {from} is too large to convert to {to}")]
    Overflow {
        /// Input quantity.
        quantity: Decimal,
        /// Source unit.
        from: String,
        /// Target unit.
        to: String,
    },
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Input quantity.
    pub quantity: Decimal,
    /// Source unit label.
    pub from: String,
    /// Target unit label.
    pub to: String,
    /// Rate applied.
    pub rate: Decimal,
    /// Converted quantity.
    pub result: Decimal,
}

/// Canonical label for a unit typed on the command line.
///
/// Aliases and case variants (`kg`, `tbsp`) resolve to the catalog label;
/// anything else is kept as typed.
fn canonical_label(typed: &str) -> String {
    Unit::parse_lenient(typed).map_or_else(
        |_| typed.trim().to_owned(),
        |unit| unit.label().to_owned(),
    )
}

/// Convert `quantity` between two unit labels.
///
/// # Errors
///
/// Returns an error if no conversion exists or the result overflows.
pub fn convert(quantity: Decimal, from: &str, to: &str) -> Result<Conversion, ConvertError> {
    let from = canonical_label(from);
    let to = canonical_label(to);
    let rate = convert_rate(&from, &to);
    if rate.is_zero() {
        return Err(ConvertError::Unconvertible { from, to });
    }
    let Some(result) = quantity.checked_mul(rate) else {
        return Err(ConvertError::Overflow { quantity, from, to });
    };
    Ok(Conversion {
        quantity,
        from,
        to,
        rate,
        result,
    })
}

/// Render a conversion.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(conversion: &Conversion, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => output::to_json(conversion),
        OutputFormat::Text => Ok(format!(
            "{} {} = {} {}\n",
            output::quantity(conversion.quantity),
            conversion.from,
            output::quantity(conversion.result),
            conversion.to
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_text() {
        let conversion = convert(Decimal::from(2), "Kg", "Gram").unwrap();
        assert_eq!(conversion.result, Decimal::from(2000));
        assert_eq!(
            render(&conversion, OutputFormat::Text).unwrap(),
            "2 Kg = 2000 Gram\n"
        );
    }

    #[test]
    fn test_convert_json() {
        let conversion = convert(Decimal::from(3), "Sdm", "ML").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&conversion, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["result"], "45");
        assert_eq!(json["rate"], "15");
    }

    #[test]
    fn test_typed_aliases_resolve_to_catalog_labels() {
        let conversion = convert(Decimal::from(2), " kg", "g").unwrap();
        assert_eq!(conversion.from, "Kg");
        assert_eq!(conversion.to, "Gram");
        assert_eq!(conversion.result, Decimal::from(2000));

        let spoons = convert(Decimal::ONE, "tbsp", "TSP").unwrap();
        assert_eq!(spoons.result, Decimal::from(3));
    }

    #[test]
    fn test_unknown_labels_convert_only_to_themselves() {
        assert_eq!(
            convert(Decimal::TWO, "ikat", "ikat").unwrap().result,
            Decimal::TWO
        );
        assert!(matches!(
            convert(Decimal::TWO, "ikat", "Gram"),
            Err(ConvertError::Unconvertible { .. })
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(
            convert(Decimal::MAX, "Kg", "Gram"),
            Err(ConvertError::Overflow {
                quantity: Decimal::MAX,
                from: "Kg".to_owned(),
                to: "Gram".to_owned(),
            })
        );
    }

    #[test]
    fn test_unconvertible() {
        assert_eq!(
            convert(Decimal::ONE, "Pcs", "Gram"),
            Err(ConvertError::Unconvertible {
                from: "Pcs".to_owned(),
                to: "Gram".to_owned()
            })
        );
    }
}
