//! Catalog validation command.
//!
//! # Usage
//!
//! ```bash
//! rc-cli validate --catalog bakery.yaml
//! ```

use recipe_costing_core::Catalog;

/// One-line summary of a catalog that passed validation.
#[must_use]
pub fn summary(catalog: &Catalog) -> String {
    let items: usize = catalog.recipes.iter().map(|r| r.items.len()).sum();
    format!(
        "Catalog OK: {} ingredients, {} recipes, {} recipe items\n",
        catalog.ingredients.len(),
        catalog.recipes.len(),
        items
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use recipe_costing_core::{Recipe, RecipeId};

    #[test]
    fn test_summary_counts() {
        let catalog = Catalog::new(Vec::new(), vec![Recipe::new(RecipeId::new(1), "Tea", 1)]);
        assert_eq!(
            summary(&catalog),
            "Catalog OK: 0 ingredients, 1 recipes, 0 recipe items\n"
        );
    }
}
