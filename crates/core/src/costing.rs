//! Recipe cost and pricing figures.
//!
//! All figures are recomputed from the recipe snapshot on every call. Any
//! zero or negative denominator yields zero for the dependent figure instead
//! of an error, so a half-entered recipe still produces a cost sheet.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::arith;
use crate::convert::rate_or_identity;
use crate::models::{Ingredient, Recipe, RecipeItem};
use crate::types::{IngredientId, RecipeItemId, UnitLabel};

/// Margin at or above which the margin formula is replaced by a flat multiplier.
const MARGIN_CLAMP_PERCENT: i64 = 99;
/// Price multiplier applied to cost when the margin is clamped.
const CLAMPED_PRICE_MULTIPLIER: i64 = 100;
/// Wholesale price is cost plus 20%.
const WHOLESALE_MULTIPLIER: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Resolves ingredient references on recipe items.
///
/// Implemented for the in-memory catalog and plain collections; a storage
/// layer can implement it over whatever snapshot it has loaded.
pub trait IngredientLookup {
    /// Find an ingredient by ID.
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient>;
}

impl<S: BuildHasher> IngredientLookup for HashMap<IngredientId, Ingredient, S> {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.get(&id)
    }
}

impl IngredientLookup for [Ingredient] {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.iter().find(|i| i.id == id)
    }
}

impl IngredientLookup for Vec<Ingredient> {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.as_slice().ingredient(id)
    }
}

/// Cost and pricing figures for one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeCost {
    /// Sum of ingredient line costs for one batch.
    pub material_cost: Decimal,
    /// Sum of flat overheads for one batch.
    pub overhead_cost: Decimal,
    /// Labor and prep time for one batch.
    pub labor_cost: Decimal,
    /// Material + overhead + labor.
    pub batch_cost: Decimal,
    /// Batch cost divided by yield.
    pub cost_per_unit: Decimal,
    /// Manual selling price, or the margin-based suggestion.
    pub suggested_price: Decimal,
    /// Suggested price with the online markup applied.
    pub online_price: Decimal,
    /// Cost per unit plus 20%.
    pub wholesale_price: Decimal,
    /// Cost per unit as a percentage of the selling price, one decimal.
    pub food_cost_percent: Decimal,
    /// Realized margin on the selling price, in percent.
    pub real_margin_percent: Decimal,
}

/// Cost of a single ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCost {
    /// Recipe line this cost belongs to.
    pub item_id: RecipeItemId,
    /// Linked ingredient, if any.
    pub ingredient_id: Option<IngredientId>,
    /// Ingredient name, when the link resolves.
    pub ingredient_name: Option<String>,
    /// Quantity used per batch, in the ingredient's purchase unit.
    pub quantity: Decimal,
    /// The ingredient's purchase unit, when the link resolves.
    pub unit: Option<UnitLabel>,
    /// Cost of the line for one batch.
    pub cost: Decimal,
}

/// Quantity a line uses per batch, expressed in the ingredient's purchase unit.
///
/// Per-piece lines are multiplied by the recipe yield before conversion.
#[must_use]
pub fn item_quantity(item: &RecipeItem, yield_qty: i32, ingredient: &Ingredient) -> Decimal {
    let usage = if item.is_per_piece {
        arith::mul(item.quantity, Decimal::from(yield_qty.max(0)))
    } else {
        item.quantity
    };
    arith::mul(usage, rate_or_identity(&item.unit, &ingredient.unit))
}

fn cost_line<L>(item: &RecipeItem, yield_qty: i32, lookup: &L) -> ItemCost
where
    L: IngredientLookup + ?Sized,
{
    let Some(ingredient) = item.ingredient_id.and_then(|id| lookup.ingredient(id)) else {
        debug!(item_id = %item.id, "recipe item has no resolvable ingredient, costing at zero");
        return ItemCost {
            item_id: item.id,
            ingredient_id: item.ingredient_id,
            ingredient_name: None,
            quantity: Decimal::ZERO,
            unit: None,
            cost: Decimal::ZERO,
        };
    };

    let quantity = item_quantity(item, yield_qty, ingredient);
    ItemCost {
        item_id: item.id,
        ingredient_id: Some(ingredient.id),
        ingredient_name: Some(ingredient.name.clone()),
        quantity,
        unit: Some(ingredient.unit.clone()),
        cost: arith::mul(ingredient.real_cost_per_unit(), quantity),
    }
}

/// Per-line cost breakdown for one batch, in item order.
#[must_use]
pub fn item_costs<L>(recipe: &Recipe, lookup: &L) -> Vec<ItemCost>
where
    L: IngredientLookup + ?Sized,
{
    recipe
        .items
        .iter()
        .map(|item| cost_line(item, recipe.yield_qty, lookup))
        .collect()
}

/// Cost of one ingredient line for one batch; zero when the ingredient is missing.
#[must_use]
pub fn item_cost<L>(item: &RecipeItem, recipe: &Recipe, lookup: &L) -> Decimal
where
    L: IngredientLookup + ?Sized,
{
    cost_line(item, recipe.yield_qty, lookup).cost
}

/// Sum of all ingredient line costs for one batch.
#[must_use]
pub fn material_cost<L>(recipe: &Recipe, lookup: &L) -> Decimal
where
    L: IngredientLookup + ?Sized,
{
    arith::sum(
        recipe
            .items
            .iter()
            .map(|item| item_cost(item, recipe, lookup)),
    )
}

/// Selling price for a unit cost.
///
/// A positive manual price wins. Otherwise `cost / (1 - margin/100)`, with
/// margins of 99% or more priced at 100x cost.
#[must_use]
pub fn suggested_price(
    cost_per_unit: Decimal,
    target_margin: Decimal,
    actual_selling_price: Option<Decimal>,
) -> Decimal {
    if let Some(actual) = actual_selling_price.filter(|p| *p > Decimal::ZERO) {
        return actual;
    }
    if target_margin >= Decimal::from(MARGIN_CLAMP_PERCENT) {
        return arith::mul(cost_per_unit, Decimal::from(CLAMPED_PRICE_MULTIPLIER));
    }
    let divisor = arith::sub(Decimal::ONE, target_margin / Decimal::ONE_HUNDRED);
    cost_per_unit.checked_div(divisor).unwrap_or(Decimal::ZERO)
}

/// Compute every cost and pricing figure for `recipe`.
#[must_use]
#[instrument(skip_all, fields(recipe_id = %recipe.id))]
pub fn compute_recipe_cost<L>(recipe: &Recipe, lookup: &L) -> RecipeCost
where
    L: IngredientLookup + ?Sized,
{
    let material_cost = material_cost(recipe, lookup);
    let overhead_cost = recipe.overhead_cost();
    let labor_cost = recipe.labor_cost();
    let batch_cost = arith::sum([material_cost, overhead_cost, labor_cost]);

    let cost_per_unit = if recipe.yield_qty > 0 {
        batch_cost / Decimal::from(recipe.yield_qty)
    } else {
        Decimal::ZERO
    };

    let suggested_price = suggested_price(
        cost_per_unit,
        recipe.target_margin,
        recipe.actual_selling_price,
    );
    let online_price = arith::mul(
        suggested_price,
        arith::add(Decimal::ONE, recipe.online_markup / Decimal::ONE_HUNDRED),
    );
    let wholesale_price = arith::mul(cost_per_unit, WHOLESALE_MULTIPLIER);

    let (food_cost_percent, real_margin_percent) = if suggested_price > Decimal::ZERO {
        (
            arith::percent_of(cost_per_unit, suggested_price).round_dp(1),
            arith::percent_of(arith::sub(suggested_price, cost_per_unit), suggested_price),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    debug!(%batch_cost, %cost_per_unit, %suggested_price, "computed recipe cost");

    RecipeCost {
        material_cost,
        overhead_cost,
        labor_cost,
        batch_cost,
        cost_per_unit,
        suggested_price,
        online_price,
        wholesale_price,
        food_cost_percent,
        real_margin_percent,
    }
}
