//! Shopping list aggregation across a production plan.
//!
//! A production plan pairs recipes with the number of pieces to make. Every
//! ingredient line is scaled to its target, converted into the ingredient's
//! purchase unit and summed per ingredient. Quantities are rounded to two
//! decimals only once everything has been summed.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::arith;
use crate::convert::rate_or_identity;
use crate::costing::IngredientLookup;
use crate::models::{Ingredient, Recipe, RecipeItem};
use crate::types::{IngredientId, UnitLabel};

/// Decimal places kept on aggregated quantities.
const QUANTITY_DECIMALS: u32 = 2;

/// One recipe in a production run with the number of pieces to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry<'a> {
    /// Recipe to produce.
    pub recipe: &'a Recipe,
    /// Output pieces wanted for this run.
    pub target_qty: i32,
}

impl<'a> PlanEntry<'a> {
    /// Pair a recipe with a target output quantity.
    #[must_use]
    pub const fn new(recipe: &'a Recipe, target_qty: i32) -> Self {
        Self { recipe, target_qty }
    }

    /// Target output divided by the recipe's yield (yield <= 0 counts as 1).
    #[must_use]
    pub fn batch_ratio(&self) -> Decimal {
        let yield_qty = if self.recipe.yield_qty > 0 {
            self.recipe.yield_qty
        } else {
            1
        };
        Decimal::from(self.target_qty) / Decimal::from(yield_qty)
    }

    /// Quantity of a line needed for this entry, before unit conversion.
    ///
    /// Literal piece counts scale with output pieces; everything else scales
    /// with the batch ratio.
    #[must_use]
    pub fn required_qty(&self, item: &RecipeItem) -> Decimal {
        if item.is_unit_based {
            arith::mul(item.quantity, Decimal::from(self.target_qty))
        } else {
            arith::mul(item.quantity, self.batch_ratio())
        }
    }
}

/// Aggregated need for one ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    /// Ingredient being bought.
    pub ingredient_id: IngredientId,
    /// Ingredient name.
    pub name: String,
    /// Purchase unit `total_qty` is expressed in.
    pub unit: UnitLabel,
    /// Ingredient category label.
    pub category: String,
    /// Total quantity needed, rounded to two decimals.
    pub total_qty: Decimal,
    /// Estimated cost of the total quantity.
    pub estimated_cost: Decimal,
}

impl ShoppingItem {
    fn start(ingredient: &Ingredient) -> Self {
        Self {
            ingredient_id: ingredient.id,
            name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            category: ingredient.category.clone(),
            total_qty: Decimal::ZERO,
            estimated_cost: Decimal::ZERO,
        }
    }
}

/// Consolidated shopping list for a production plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    /// Items in the order their ingredient was first encountered.
    pub items: Vec<ShoppingItem>,
    /// Sum of all estimated costs.
    pub total_budget: Decimal,
}

impl ShoppingList {
    /// Whether the plan needs nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items grouped by category label, categories in first-seen order.
    #[must_use]
    pub fn by_category(&self) -> Vec<(&str, Vec<&ShoppingItem>)> {
        let mut groups: Vec<(&str, Vec<&ShoppingItem>)> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.category.as_str(), vec![item])),
            }
        }
        groups
    }
}

/// Build the shopping list for a production plan.
///
/// Items without a resolvable ingredient are skipped. The result depends only
/// on the arguments, so calling this again with the same plan yields the same
/// list.
#[must_use]
#[instrument(skip_all, fields(entries = plan.len()))]
pub fn generate_shopping_list<L>(plan: &[PlanEntry<'_>], lookup: &L) -> ShoppingList
where
    L: IngredientLookup + ?Sized,
{
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut positions: HashMap<IngredientId, usize> = HashMap::new();

    for entry in plan {
        for item in &entry.recipe.items {
            let Some(ingredient) = item.ingredient_id.and_then(|id| lookup.ingredient(id)) else {
                debug!(
                    recipe_id = %entry.recipe.id,
                    item_id = %item.id,
                    "skipping recipe item without ingredient"
                );
                continue;
            };

            let final_qty = arith::mul(
                entry.required_qty(item),
                rate_or_identity(&item.unit, &ingredient.unit),
            );

            let position = *positions.entry(ingredient.id).or_insert_with(|| {
                items.push(ShoppingItem::start(ingredient));
                items.len() - 1
            });
            if let Some(line) = items.get_mut(position) {
                line.total_qty = arith::add(line.total_qty, final_qty);
                line.estimated_cost = arith::add(
                    line.estimated_cost,
                    arith::mul(final_qty, ingredient.real_cost_per_unit()),
                );
            }
        }
    }

    for line in &mut items {
        line.total_qty = line.total_qty.round_dp(QUANTITY_DECIMALS);
    }
    let total_budget = arith::sum(items.iter().map(|line| line.estimated_cost));

    debug!(items = items.len(), %total_budget, "generated shopping list");

    ShoppingList {
        items,
        total_budget,
    }
}
