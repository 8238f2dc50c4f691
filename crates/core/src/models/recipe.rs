//! Recipe records with their ingredient lines and overheads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arith;
use crate::types::{IngredientId, RecipeId, RecipeItemId, RecipeOverheadId, UnitLabel};

const MINUTES_PER_HOUR: i64 = 60;

/// A recipe: what one batch uses and how its output is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe ID.
    pub id: RecipeId,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: String,
    /// Number of output pieces one batch produces.
    pub yield_qty: i32,
    /// Desired margin on the selling price, in percent.
    #[serde(default)]
    pub target_margin: Decimal,
    /// Manually set selling price; overrides the margin-based suggestion when positive.
    #[serde(default)]
    pub actual_selling_price: Option<Decimal>,
    /// Markup applied on top of the selling price for online channels, in percent.
    #[serde(default)]
    pub online_markup: Decimal,
    /// Hands-on labor per batch.
    #[serde(default)]
    pub labor_minutes: i32,
    /// Labor rate per hour.
    #[serde(default)]
    pub labor_rate_per_hour: Decimal,
    /// Preparation time per batch, billed at the labor rate.
    #[serde(default)]
    pub prep_minutes: i32,
    /// Ingredient lines, in display order.
    #[serde(default)]
    pub items: Vec<RecipeItem>,
    /// Flat per-batch costs (gas, packaging, electricity).
    #[serde(default)]
    pub overheads: Vec<RecipeOverhead>,
}

impl Recipe {
    /// Create an empty recipe producing `yield_qty` pieces per batch.
    #[must_use]
    pub fn new(id: RecipeId, name: impl Into<String>, yield_qty: i32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            yield_qty,
            target_margin: Decimal::ZERO,
            actual_selling_price: None,
            online_markup: Decimal::ZERO,
            labor_minutes: 0,
            labor_rate_per_hour: Decimal::ZERO,
            prep_minutes: 0,
            items: Vec::new(),
            overheads: Vec::new(),
        }
    }

    /// Sum of all overhead lines for one batch.
    #[must_use]
    pub fn overhead_cost(&self) -> Decimal {
        arith::sum(self.overheads.iter().map(|o| o.cost))
    }

    /// Labor and prep time for one batch, billed at the hourly rate.
    #[must_use]
    pub fn labor_cost(&self) -> Decimal {
        let minutes = i64::from(self.labor_minutes) + i64::from(self.prep_minutes);
        arith::mul(
            Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR),
            self.labor_rate_per_hour,
        )
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Unique line ID.
    pub id: RecipeItemId,
    /// Ingredient used; `None` while the line has not been linked yet.
    #[serde(default)]
    pub ingredient_id: Option<IngredientId>,
    /// Quantity used, in `unit`.
    pub quantity: Decimal,
    /// Unit the quantity is expressed in.
    pub unit: UnitLabel,
    /// Quantity is a literal piece count ("2 eggs") that scales with output pieces.
    #[serde(default)]
    pub is_unit_based: bool,
    /// Quantity is per output piece rather than per batch.
    #[serde(default)]
    pub is_per_piece: bool,
    /// Informational usage label (e.g. "Main", "Garnish").
    #[serde(default)]
    pub usage_category: String,
}

impl RecipeItem {
    /// Create a per-batch line for `ingredient_id`.
    #[must_use]
    pub fn new(
        id: RecipeItemId,
        ingredient_id: IngredientId,
        quantity: Decimal,
        unit: impl Into<UnitLabel>,
    ) -> Self {
        Self {
            id,
            ingredient_id: Some(ingredient_id),
            quantity,
            unit: unit.into(),
            is_unit_based: false,
            is_per_piece: false,
            usage_category: String::new(),
        }
    }

    /// Mark the quantity as a literal piece count.
    #[must_use]
    pub const fn unit_based(mut self) -> Self {
        self.is_unit_based = true;
        self
    }

    /// Mark the quantity as per output piece.
    #[must_use]
    pub const fn per_piece(mut self) -> Self {
        self.is_per_piece = true;
        self
    }
}

/// A flat cost added once per batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeOverhead {
    /// Unique overhead ID.
    pub id: RecipeOverheadId,
    /// What the cost is for.
    pub name: String,
    /// Cost per batch.
    pub cost: Decimal,
}

impl RecipeOverhead {
    /// Create an overhead line.
    #[must_use]
    pub fn new(id: RecipeOverheadId, name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
        }
    }
}
