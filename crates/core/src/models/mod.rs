//! Plain records supplied by the storage layer.
//!
//! The costing pipeline only reads these; creating, editing and deleting
//! them is the job of whatever owns persistence.

pub mod ingredient;
pub mod recipe;
pub mod transaction;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeItem, RecipeOverhead};
pub use transaction::{Transaction, TransactionKind};
