//! Core value types for recipe costing.
//!
//! This module provides type-safe wrappers for IDs, prices and measurement units.

pub mod id;
pub mod price;
pub mod unit;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use unit::{Unit, UnitCategory, UnitError, UnitLabel};
