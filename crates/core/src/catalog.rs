//! In-memory catalog of ingredients and recipes.
//!
//! A catalog is the snapshot a storage layer hands to the costing pipeline.
//! [`Catalog::validate`] reports structural problems for callers that want
//! to reject bad input; the computations themselves accept any catalog.
//!
//! ## YAML Format
//!
//! ```yaml
//! ingredients:
//!   - id: 1
//!     name: Flour
//!     price: 15000
//!     package_qty: 1
//!     unit: Kg
//!     category: Dry
//! recipes:
//!   - id: 1
//!     name: Brownies
//!     yield_qty: 12
//!     target_margin: 60
//!     items:
//!       - id: 1
//!         ingredient_id: 1
//!         quantity: 250
//!         unit: Gram
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::costing::IngredientLookup;
use crate::models::{Ingredient, Recipe};
use crate::types::{IngredientId, RecipeId, RecipeItemId};

/// Structural problems in a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two ingredients share an ID.
    #[error("duplicate ingredient id {0}")]
    DuplicateIngredient(IngredientId),

    /// Two recipes share an ID.
    #[error("duplicate recipe id {0}")]
    DuplicateRecipe(RecipeId),

    /// A recipe line points at an ingredient that is not in the catalog.
    #[error("recipe {recipe} item {item} references unknown ingredient {ingredient}")]
    UnknownIngredient {
        /// Recipe containing the line.
        recipe: RecipeId,
        /// Offending line.
        item: RecipeItemId,
        /// Missing ingredient.
        ingredient: IngredientId,
    },

    /// An ingredient claims to be produced by a recipe that is not in the catalog.
    #[error("ingredient {ingredient} links to unknown sub-recipe {recipe}")]
    UnknownSubRecipe {
        /// Ingredient carrying the link.
        ingredient: IngredientId,
        /// Missing recipe.
        recipe: RecipeId,
    },

    /// Prices are never negative.
    #[error("ingredient {0} has a negative price")]
    NegativePrice(IngredientId),

    /// Yield must be a percentage.
    #[error("ingredient {0} has a yield percent outside 0-100")]
    YieldOutOfRange(IngredientId),
}

/// Ingredients and recipes loaded at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// All known ingredients.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// All known recipes.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create a catalog from loaded records.
    #[must_use]
    pub const fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Self {
        Self {
            ingredients,
            recipes,
        }
    }

    /// Find a recipe by ID.
    #[must_use]
    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Find a recipe by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        let name = name.trim();
        self.recipes
            .iter()
            .find(|r| r.name.trim().eq_ignore_ascii_case(name))
    }

    /// Find a recipe by ID if `reference` is numeric, otherwise by name.
    #[must_use]
    pub fn resolve_recipe(&self, reference: &str) -> Option<&Recipe> {
        reference
            .parse::<RecipeId>()
            .ok()
            .and_then(|id| self.recipe(id))
            .or_else(|| self.recipe_by_name(reference))
    }

    /// Report every structural problem in the catalog.
    ///
    /// # Errors
    ///
    /// Returns all problems found, in catalog order.
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let mut errors = Vec::new();

        let mut ingredient_ids = HashSet::new();
        for ingredient in &self.ingredients {
            if !ingredient_ids.insert(ingredient.id) {
                errors.push(CatalogError::DuplicateIngredient(ingredient.id));
            }
            if ingredient.price < Decimal::ZERO {
                errors.push(CatalogError::NegativePrice(ingredient.id));
            }
            if ingredient.yield_percent < Decimal::ZERO
                || ingredient.yield_percent > Decimal::ONE_HUNDRED
            {
                errors.push(CatalogError::YieldOutOfRange(ingredient.id));
            }
        }

        let mut recipe_ids = HashSet::new();
        for recipe in &self.recipes {
            if !recipe_ids.insert(recipe.id) {
                errors.push(CatalogError::DuplicateRecipe(recipe.id));
            }
            for item in &recipe.items {
                if let Some(ingredient) = item.ingredient_id
                    && !ingredient_ids.contains(&ingredient)
                {
                    errors.push(CatalogError::UnknownIngredient {
                        recipe: recipe.id,
                        item: item.id,
                        ingredient,
                    });
                }
            }
        }

        for ingredient in &self.ingredients {
            if let Some(recipe) = ingredient.sub_recipe_id
                && !recipe_ids.contains(&recipe)
            {
                errors.push(CatalogError::UnknownSubRecipe {
                    ingredient: ingredient.id,
                    recipe,
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl IngredientLookup for Catalog {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.ingredient(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const CATALOG: &str = r"
ingredients:
  - id: 1
    name: Flour
    price: 15000
    package_qty: 1
    unit: Kg
    category: Dry
  - id: 2
    name: Chocolate Ganache
    price: 0
    package_qty: 1
    unit: Gram
    sub_recipe_id: 2
recipes:
  - id: 1
    name: Brownies
    yield_qty: 12
    target_margin: 60
    items:
      - id: 1
        ingredient_id: 1
        quantity: 250
        unit: Gram
  - id: 2
    name: Ganache
    yield_qty: 500
";

    fn catalog() -> Catalog {
        serde_yaml::from_str(CATALOG).unwrap()
    }

    #[test]
    fn test_parse_and_validate() {
        let catalog = catalog();
        assert_eq!(catalog.ingredients.len(), 2);
        assert_eq!(catalog.recipes.len(), 2);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_resolve_recipe_by_id_or_name() {
        let catalog = catalog();
        assert_eq!(catalog.resolve_recipe("2").unwrap().name, "Ganache");
        assert_eq!(catalog.resolve_recipe(" brownies ").unwrap().id, RecipeId::new(1));
        assert!(catalog.resolve_recipe("Croissant").is_none());
    }

    #[test]
    fn test_lookup_through_catalog() {
        let catalog = catalog();
        assert_eq!(
            catalog.ingredient(IngredientId::new(1)).unwrap().name,
            "Flour"
        );
        assert!(catalog.ingredient(IngredientId::new(9)).is_none());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut catalog = catalog();
        let mut duplicate = catalog.ingredients[0].clone();
        duplicate.price = Decimal::from(-1);
        duplicate.yield_percent = Decimal::from(120);
        catalog.ingredients.push(duplicate);
        catalog.ingredients[1].sub_recipe_id = Some(RecipeId::new(77));
        catalog.recipes[0].items[0].ingredient_id = Some(IngredientId::new(5));
        let copy = catalog.recipes[1].clone();
        catalog.recipes.push(copy);

        let errors = catalog.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                CatalogError::DuplicateIngredient(IngredientId::new(1)),
                CatalogError::NegativePrice(IngredientId::new(1)),
                CatalogError::YieldOutOfRange(IngredientId::new(1)),
                CatalogError::UnknownIngredient {
                    recipe: RecipeId::new(1),
                    item: RecipeItemId::new(1),
                    ingredient: IngredientId::new(5),
                },
                CatalogError::DuplicateRecipe(RecipeId::new(2)),
                CatalogError::UnknownSubRecipe {
                    ingredient: IngredientId::new(2),
                    recipe: RecipeId::new(77),
                },
            ]
        );
    }
}
