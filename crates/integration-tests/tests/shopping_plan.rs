//! End-to-end shopping list generation for a production plan.

#![allow(clippy::unwrap_used)]

use recipe_costing_core::{
    Catalog, IngredientId, PlanEntry, PlanError, PlanLine, RecipeId, RecipeRef, ShoppingList,
    generate_shopping_list, resolve_plan,
};
use recipe_costing_integration_tests::{bakery_catalog, weekend_plan};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn weekend_list(catalog: &Catalog) -> ShoppingList {
    let plan = resolve_plan(catalog, &weekend_plan()).unwrap();
    generate_shopping_list(&plan, catalog)
}

// =============================================================================
// Weekend Plan Tests
// =============================================================================

#[test]
fn test_plan_fixture_resolves_by_name_and_id() {
    let lines = weekend_plan();
    let refs: Vec<&RecipeRef> = lines.iter().map(|l| &l.recipe).collect();
    assert_eq!(
        refs,
        vec![&RecipeRef::Name("Bolu Pandan".to_owned()), &RecipeRef::Id(2)]
    );

    let catalog = bakery_catalog();
    let plan = resolve_plan(&catalog, &lines).unwrap();
    let resolved: Vec<(RecipeId, i32)> = plan
        .iter()
        .map(|entry| (entry.recipe.id, entry.target_qty))
        .collect();
    assert_eq!(resolved, vec![(RecipeId::new(1), 25), (RecipeId::new(2), 10)]);
}

#[test]
fn test_plan_file_rejects_bad_lines() {
    let catalog = bakery_catalog();

    let zero: Vec<PlanLine> =
        serde_yaml::from_str("- recipe: Sambal Bawang\n  target: 0\n").unwrap();
    assert_eq!(
        resolve_plan(&catalog, &zero).unwrap_err(),
        PlanError::NonPositiveTarget {
            recipe: "Sambal Bawang".to_owned(),
            target: 0,
        }
    );

    let unknown: Vec<PlanLine> = serde_yaml::from_str("- recipe: 42\n  target: 5\n").unwrap();
    assert_eq!(
        resolve_plan(&catalog, &unknown).unwrap_err(),
        PlanError::UnknownRecipe("#42".to_owned())
    );

    assert_eq!(resolve_plan(&catalog, &[]).unwrap_err(), PlanError::Empty);
}

#[test]
fn test_weekend_list_order_and_totals() {
    let catalog = bakery_catalog();
    let list = weekend_list(&catalog);

    let ids: Vec<i32> = list.items.iter().map(|i| i.ingredient_id.as_i32()).collect();
    // First-seen order: Bolu lines, then the Sambal shallots
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 7, 6]);

    let totals: Vec<Decimal> = list.items.iter().map(|i| i.total_qty).collect();
    assert_eq!(
        totals,
        vec![
            // 0.625 kg rounds half to even
            dec("0.62"),
            // 0.5 kg for the cakes plus 4 Sdm (60 g) for the sambal
            dec("0.56"),
            Decimal::from(10),
            Decimal::from(250),
            dec("0.5"),
            // Unit-based: 25 cakes + 10 jars
            Decimal::from(35),
            Decimal::ONE,
        ]
    );
}

#[test]
fn test_weekend_budget_uses_unrounded_quantities() {
    let catalog = bakery_catalog();
    let list = weekend_list(&catalog);

    let flour = list.items.first().unwrap();
    assert_eq!(flour.estimated_cost, Decimal::from(8_750));

    let boxes = list
        .items
        .iter()
        .find(|i| i.ingredient_id == IngredientId::new(7))
        .unwrap();
    assert_eq!(boxes.estimated_cost, Decimal::from(35_000));

    assert_eq!(list.total_budget, Decimal::from(151_710));
    let summed: Decimal = list.items.iter().map(|i| i.estimated_cost).sum();
    assert_eq!(summed, list.total_budget);
}

#[test]
fn test_weekend_list_groups_by_category() {
    let catalog = bakery_catalog();
    let list = weekend_list(&catalog);

    let groups: Vec<(&str, usize)> = list
        .by_category()
        .into_iter()
        .map(|(category, items)| (category, items.len()))
        .collect();
    assert_eq!(
        groups,
        vec![("Dry", 2), ("Fresh", 2), ("Dairy", 2), ("Packaging", 1)]
    );
}

#[test]
fn test_items_carry_purchase_unit() {
    let catalog = bakery_catalog();
    let list = weekend_list(&catalog);
    let units: Vec<&str> = list.items.iter().map(|i| i.unit.as_str()).collect();
    assert_eq!(units, vec!["Kg", "Kg", "Pcs", "Gram", "Liter", "Pcs", "Kg"]);
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[test]
fn test_empty_plan() {
    let catalog = bakery_catalog();
    let list = generate_shopping_list(&[], &catalog);
    assert!(list.is_empty());
    assert_eq!(list.total_budget, Decimal::ZERO);
}

#[test]
fn test_zero_yield_recipe_treated_as_single_batch_yield() {
    let catalog = bakery_catalog();
    let choux = catalog.resolve_recipe("Kue Sus").unwrap();
    let list = generate_shopping_list(&[PlanEntry::new(choux, 3)], &catalog);

    // Unlinked line is skipped; flour 100 g x 3 and vanilla 1 "ikat" x 3
    let ids: Vec<i32> = list.items.iter().map(|i| i.ingredient_id.as_i32()).collect();
    assert_eq!(ids, vec![1, 8]);
    assert_eq!(list.items.first().unwrap().total_qty, dec("0.3"));
    assert_eq!(list.items.last().unwrap().total_qty, Decimal::from(3));
    assert_eq!(list.total_budget, Decimal::from(4_200 + 1_500));
}

#[test]
fn test_same_recipe_twice_accumulates() {
    let catalog = bakery_catalog();
    let sambal = catalog.resolve_recipe("Sambal Bawang").unwrap();
    let once = generate_shopping_list(&[PlanEntry::new(sambal, 10)], &catalog);
    let twice = generate_shopping_list(
        &[PlanEntry::new(sambal, 5), PlanEntry::new(sambal, 5)],
        &catalog,
    );
    assert_eq!(once, twice);
}

#[test]
fn test_generation_is_repeatable() {
    let catalog = bakery_catalog();
    assert_eq!(weekend_list(&catalog), weekend_list(&catalog));
}
