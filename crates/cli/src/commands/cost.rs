//! Recipe cost sheet command.
//!
//! # Usage
//!
//! ```bash
//! # Cost sheet for every recipe in the default catalog
//! rc-cli cost
//!
//! # One recipe, by name or id, as JSON
//! rc-cli cost --catalog bakery.yaml --recipe Brownies --format json
//! ```

use std::fmt::Write as _;

use recipe_costing_core::{
    Catalog, CurrencyCode, ItemCost, Recipe, RecipeCost, RecipeId, compute_recipe_cost,
    item_costs,
};
use serde::Serialize;
use thiserror::Error;

use crate::output::{self, money, percent};

/// Errors that can occur while building cost sheets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CostError {
    /// The requested recipe is not in the catalog.
    #[error("recipe not found: {0}")]
    RecipeNotFound(String),
}

/// Cost breakdown and pricing for one recipe.
#[derive(Debug, Clone, Serialize)]
pub struct CostSheet<'a> {
    /// Recipe ID.
    pub recipe_id: RecipeId,
    /// Recipe name.
    pub name: &'a str,
    /// Pieces per batch.
    pub yield_qty: i32,
    /// Per-line material costs.
    pub items: Vec<ItemCost>,
    /// Totals and pricing.
    pub cost: RecipeCost,
}

impl<'a> CostSheet<'a> {
    fn build(recipe: &'a Recipe, catalog: &Catalog) -> Self {
        Self {
            recipe_id: recipe.id,
            name: &recipe.name,
            yield_qty: recipe.yield_qty,
            items: item_costs(recipe, catalog),
            cost: compute_recipe_cost(recipe, catalog),
        }
    }
}

/// Build cost sheets for one recipe (by ID or name) or all recipes.
///
/// # Errors
///
/// Returns an error if a requested recipe does not exist.
pub fn build_sheets<'a>(
    catalog: &'a Catalog,
    recipe: Option<&str>,
) -> Result<Vec<CostSheet<'a>>, CostError> {
    match recipe {
        Some(reference) => {
            let recipe = catalog
                .resolve_recipe(reference)
                .ok_or_else(|| CostError::RecipeNotFound(reference.to_owned()))?;
            Ok(vec![CostSheet::build(recipe, catalog)])
        }
        None => Ok(catalog
            .recipes
            .iter()
            .map(|recipe| CostSheet::build(recipe, catalog))
            .collect()),
    }
}

/// Render cost sheets as text.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_text(
    sheets: &[CostSheet<'_>],
    currency: CurrencyCode,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    for (i, sheet) in sheets.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} (#{}, yield {})", sheet.name, sheet.recipe_id, sheet.yield_qty)?;

        for line in &sheet.items {
            match (&line.ingredient_name, &line.unit) {
                (Some(name), Some(unit)) => writeln!(
                    out,
                    "  {name:<24} {:>10} {unit:<6} {:>16}",
                    output::quantity(line.quantity),
                    money(line.cost, currency)
                )?,
                _ => writeln!(
                    out,
                    "  {:<24} {:>34}",
                    "(unlinked item)",
                    money(line.cost, currency)
                )?,
            }
        }

        let cost = &sheet.cost;
        let rows = [
            ("Material cost", money(cost.material_cost, currency)),
            ("Overhead cost", money(cost.overhead_cost, currency)),
            ("Labor cost", money(cost.labor_cost, currency)),
            ("Batch cost", money(cost.batch_cost, currency)),
            ("Cost per unit", money(cost.cost_per_unit, currency)),
            ("Suggested price", money(cost.suggested_price, currency)),
            ("Online price", money(cost.online_price, currency)),
            ("Wholesale price", money(cost.wholesale_price, currency)),
            ("Food cost", percent(cost.food_cost_percent)),
            ("Real margin", percent(cost.real_margin_percent)),
        ];
        for (label, value) in rows {
            writeln!(out, "  {label:<24} {value:>34}")?;
        }
    }

    Ok(out)
}
