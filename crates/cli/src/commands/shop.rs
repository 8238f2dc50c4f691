//! Shopping list command.
//!
//! # Usage
//!
//! ```bash
//! rc-cli shop --plan weekend.yaml
//! rc-cli shop --plan weekend.yaml --catalog bakery.yaml --format json
//! ```
//!
//! Plan files are parsed and resolved by [`recipe_costing_core::plan`].

use std::fmt::{self, Write as _};

use recipe_costing_core::{CurrencyCode, ShoppingList};

use crate::output::{self, money};

/// Render a shopping list as text, grouped by category.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_text(list: &ShoppingList, currency: CurrencyCode) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if list.is_empty() {
        writeln!(out, "Nothing to buy.")?;
        return Ok(out);
    }

    for (category, items) in list.by_category() {
        let heading = if category.is_empty() {
            "Uncategorized"
        } else {
            category
        };
        writeln!(out, "{heading}")?;
        for item in items {
            writeln!(
                out,
                "  {:<24} {:>10} {:<6} {:>16}",
                item.name,
                output::quantity(item.total_qty),
                item.unit,
                money(item.estimated_cost, currency)
            )?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "  {:<24} {:>34}",
        "Total budget",
        money(list.total_budget, currency)
    )?;

    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use recipe_costing_core::{Catalog, PlanLine, RecipeRef, generate_shopping_list, resolve_plan};
    use rust_decimal::Decimal;

    const CATALOG: &str = r"
ingredients:
  - id: 1
    name: Flour
    price: 12000
    package_qty: 1
    unit: Kg
    category: Dry
  - id: 2
    name: Egg
    price: 2000
    package_qty: 1
    unit: Pcs
recipes:
  - id: 1
    name: Bread
    yield_qty: 10
    items:
      - id: 1
        ingredient_id: 1
        quantity: 500
        unit: Gram
      - id: 2
        ingredient_id: 2
        quantity: 1
        unit: Pcs
        is_unit_based: true
";

    fn catalog() -> Catalog {
        serde_yaml::from_str(CATALOG).unwrap()
    }

    #[test]
    fn test_render_text() {
        let catalog = catalog();
        let lines = vec![PlanLine {
            recipe: RecipeRef::Id(1),
            target: 20,
        }];
        let plan = resolve_plan(&catalog, &lines).unwrap();
        let list = generate_shopping_list(&plan, &catalog);
        assert_eq!(list.total_budget, Decimal::from(52_000));

        let text = render_text(&list, CurrencyCode::IDR).unwrap();
        assert!(text.starts_with("Dry\n"));
        assert!(text.contains("Uncategorized\n"));
        assert!(text.contains("Rp 52000.00"));
    }

    #[test]
    fn test_render_empty_list() {
        let text = render_text(&ShoppingList::default(), CurrencyCode::IDR).unwrap();
        assert_eq!(text, "Nothing to buy.\n");
    }
}
