//! Integration tests for Recipe Costing.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p recipe-costing-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `costing_pipeline` - Catalog fixture through cost sheets
//! - `shopping_plan` - Production plan through the shopping list
//! - `ledger_journal` - Journal fixture through summaries
//!
//! Fixtures live in `fixtures/` and are compiled in, so tests never touch
//! the filesystem. Plan files go through the same `PlanLine` parsing and
//! `resolve_plan` checks the CLI uses.

use recipe_costing_core::{Catalog, PlanLine, Transaction};

/// Bakery catalog: seven bought ingredients, one made in-house, three recipes.
pub const BAKERY_CATALOG: &str = include_str!("../fixtures/bakery.yaml");

/// Weekend production plan against [`BAKERY_CATALOG`].
pub const WEEKEND_PLAN: &str = include_str!("../fixtures/weekend_plan.yaml");

/// A month and a bit of bookkeeping.
pub const JOURNAL: &str = include_str!("../fixtures/journal.yaml");

/// Parse the bakery catalog fixture.
///
/// # Panics
///
/// Panics if the fixture is not valid YAML for a catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn bakery_catalog() -> Catalog {
    serde_yaml::from_str(BAKERY_CATALOG).expect("bakery fixture parses")
}

/// Parse the weekend plan fixture.
///
/// # Panics
///
/// Panics if the fixture is not valid YAML for a plan.
#[must_use]
#[allow(clippy::expect_used)]
pub fn weekend_plan() -> Vec<PlanLine> {
    serde_yaml::from_str(WEEKEND_PLAN).expect("plan fixture parses")
}

/// Parse the journal fixture.
///
/// # Panics
///
/// Panics if the fixture is not valid YAML for a journal.
#[must_use]
#[allow(clippy::expect_used)]
pub fn journal() -> Vec<Transaction> {
    serde_yaml::from_str(JOURNAL).expect("journal fixture parses")
}
