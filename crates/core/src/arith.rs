//! Overflow-safe decimal arithmetic for cost and quantity figures.
//!
//! `Decimal` operators panic once a result leaves the 96-bit range. Figures
//! computed from user-entered catalogs must never abort, so products and sums
//! saturate at `Decimal::MAX`/`Decimal::MIN` and log the event at debug.

use rust_decimal::Decimal;
use tracing::debug;

/// `a * b`, saturating on overflow.
pub(crate) fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        debug!(%a, %b, "decimal multiplication overflowed, saturating");
        a.saturating_mul(b)
    })
}

/// `a + b`, saturating on overflow.
pub(crate) fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        debug!(%a, %b, "decimal addition overflowed, saturating");
        a.saturating_add(b)
    })
}

/// `a - b`, saturating on overflow.
pub(crate) fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        debug!(%a, %b, "decimal subtraction overflowed, saturating");
        a.saturating_sub(b)
    })
}

/// Sum of `values`, saturating on overflow.
pub(crate) fn sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, add)
}

/// `part / whole * 100`, or zero when the quotient is undefined or overflows.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .map_or(Decimal::ZERO, |ratio| mul(ratio, Decimal::ONE_HUNDRED))
}
