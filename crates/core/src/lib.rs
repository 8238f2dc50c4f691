//! Recipe Costing Core - unit conversion, cost and shopping list computations.
//!
//! This crate is used by:
//! - `cli` - Command-line cost sheets, shopping lists and journal summaries
//! - `integration-tests` - End-to-end checks over YAML fixtures
//!
//! # Architecture
//!
//! The core crate contains only records and pure functions - no I/O, no
//! database access, no shared state. Every computation reads a snapshot of
//! ingredients and recipes and returns freshly built results, so it can be
//! called from any thread or event loop without synchronization.
//!
//! Data flows one way: [`shopping`] uses [`costing`] for per-unit ingredient
//! costs, and both normalize quantities through [`convert`].
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices and measurement units
//! - [`models`] - Ingredient, recipe and transaction records
//! - [`catalog`] - In-memory catalog with validation and lookups
//! - [`convert`] - Unit conversion rates
//! - [`costing`] - Recipe cost and pricing figures
//! - [`shopping`] - Shopping list aggregation across a production plan
//! - [`plan`] - Production plan files resolved against a catalog
//! - [`ledger`] - Income/expense journal summaries

#![cfg_attr(not(test), forbid(unsafe_code))]

mod arith;

pub mod catalog;
pub mod convert;
pub mod costing;
pub mod ledger;
pub mod models;
pub mod plan;
pub mod shopping;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use convert::{convert_quantity, convert_rate};
pub use costing::{IngredientLookup, ItemCost, RecipeCost, compute_recipe_cost, item_costs};
pub use ledger::{DateWindow, LedgerError, LedgerSummary};
pub use models::*;
pub use plan::{PlanError, PlanLine, RecipeRef, resolve_plan};
pub use shopping::{PlanEntry, ShoppingItem, ShoppingList, generate_shopping_list};
pub use types::*;
