//! Quantity normalization between unit labels.
//!
//! Every computation that mixes a recipe's usage unit with an ingredient's
//! purchase unit goes through [`convert_rate`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{Unit, UnitLabel};

/// Rate that turns a quantity in `from` into a quantity in `to`.
///
/// Returns zero when no conversion is known: either label is not one of the
/// canonical labels (`Gram`, `Kg`, `Ons`, `ML`, `Liter`, `Sdm`, `Sdt`, `Cup`,
/// `Pcs`), or exactly one side is a count unit. Zero is a sentinel, never a
/// real rate. Identical labels always convert at 1, recognized or not.
///
/// ```
/// use recipe_costing_core::convert_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(convert_rate("Kg", "Gram"), Decimal::ONE_THOUSAND);
/// assert_eq!(convert_rate("Pcs", "Gram"), Decimal::ZERO);
/// assert_eq!(convert_rate("kg", "Gram"), Decimal::ZERO);
/// ```
#[must_use]
pub fn convert_rate(from: &str, to: &str) -> Decimal {
    if from == to {
        return Decimal::ONE;
    }
    known_rate(Unit::from_label(from), Unit::from_label(to))
}

fn known_rate(from: Option<Unit>, to: Option<Unit>) -> Decimal {
    from.zip(to)
        .and_then(|(from, to)| from.rate_to(to))
        .unwrap_or(Decimal::ZERO)
}

/// Convert `quantity` from one unit label to another.
///
/// Returns `None` when [`convert_rate`] knows no conversion or the result
/// does not fit in a `Decimal`.
#[must_use]
pub fn convert_quantity(quantity: Decimal, from: &str, to: &str) -> Option<Decimal> {
    let rate = convert_rate(from, to);
    if rate.is_zero() {
        return None;
    }
    quantity.checked_mul(rate)
}

/// Conversion rate for costing, falling back to 1 for unmapped pairs.
///
/// An unmapped pair still has to contribute quantity and cost, so the
/// quantity is taken as already being in the target unit.
pub(crate) fn rate_or_identity(from: &UnitLabel, to: &UnitLabel) -> Decimal {
    let rate = if from == to {
        Decimal::ONE
    } else {
        known_rate(from.unit(), to.unit())
    };
    if rate.is_zero() {
        debug!(from = %from, to = %to, "no unit conversion, using rate 1");
        Decimal::ONE
    } else {
        rate
    }
}
