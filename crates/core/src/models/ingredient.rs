//! Purchased ingredient records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arith;
use crate::types::{IngredientId, RecipeId, UnitLabel};

const fn default_yield_percent() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// An ingredient as bought from a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient ID.
    pub id: IngredientId,
    /// Display name.
    pub name: String,
    /// Price paid for one package.
    pub price: Decimal,
    /// Quantity contained in one package, in `unit`.
    pub package_qty: Decimal,
    /// Unit the package quantity is measured in.
    pub unit: UnitLabel,
    /// Percentage of the purchased quantity that is usable after trimming (0-100).
    #[serde(default = "default_yield_percent")]
    pub yield_percent: Decimal,
    /// Free-form grouping label (e.g. "Dairy", "Packaging").
    #[serde(default)]
    pub category: String,
    /// Recipe that produces this ingredient, when it is made in-house.
    #[serde(default)]
    pub sub_recipe_id: Option<RecipeId>,
}

impl Ingredient {
    /// Create an ingredient with a 100% yield and no category.
    #[must_use]
    pub fn new(
        id: IngredientId,
        name: impl Into<String>,
        price: Decimal,
        package_qty: Decimal,
        unit: impl Into<UnitLabel>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            package_qty,
            unit: unit.into(),
            yield_percent: Decimal::ONE_HUNDRED,
            category: String::new(),
            sub_recipe_id: None,
        }
    }

    /// Set the usable yield percentage.
    #[must_use]
    pub fn with_yield_percent(mut self, yield_percent: Decimal) -> Self {
        self.yield_percent = yield_percent;
        self
    }

    /// Set the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Cost of one usable unit (in `unit`) after accounting for yield loss.
    ///
    /// `price / (package_qty * yield_percent / 100)`, or zero when the package
    /// quantity or yield is not positive.
    #[must_use]
    pub fn real_cost_per_unit(&self) -> Decimal {
        if self.package_qty <= Decimal::ZERO || self.yield_percent <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let usable = arith::mul(self.package_qty, self.yield_percent) / Decimal::ONE_HUNDRED;
        self.price.checked_div(usable).unwrap_or(Decimal::ZERO)
    }
}
