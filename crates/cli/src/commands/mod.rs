//! Command implementations.

pub mod convert;
pub mod cost;
pub mod ledger;
pub mod shop;
pub mod validate;
