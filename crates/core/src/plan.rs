//! Production plan files and their resolution against a catalog.
//!
//! A plan file lists recipes, by ID or by name (case-insensitive), with the
//! number of pieces to make:
//!
//! ```yaml
//! - recipe: Brownies
//!   target: 48
//! - recipe: 3
//!   target: 20
//! ```
//!
//! [`generate_shopping_list`](crate::generate_shopping_list) accepts any plan.
//! [`resolve_plan`] is the stricter entry point for plans read from files.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::shopping::PlanEntry;
use crate::types::RecipeId;

/// Errors that can occur while resolving a production plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The plan references a recipe that is not in the catalog.
    #[error("plan references unknown recipe: {0}")]
    UnknownRecipe(String),

    /// Target quantities must be positive.
    #[error("plan target for {recipe} must be positive, got {target}")]
    NonPositiveTarget {
        /// Recipe name.
        recipe: String,
        /// Offending target.
        target: i32,
    },

    /// A plan with no entries produces no list.
    #[error("plan is empty")]
    Empty,
}

/// How a plan line names its recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeRef {
    Id(i32),
    Name(String),
}

impl fmt::Display for RecipeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// One line of a production plan file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLine {
    /// Recipe to produce.
    pub recipe: RecipeRef,
    /// Output pieces wanted.
    pub target: i32,
}

/// Resolve plan lines against the catalog.
///
/// Numeric references are recipe IDs; text references are tried as an ID
/// first and then as a name.
///
/// # Errors
///
/// Returns an error if the plan is empty, a recipe is unknown, or a target
/// is not positive.
pub fn resolve_plan<'a>(
    catalog: &'a Catalog,
    lines: &[PlanLine],
) -> Result<Vec<PlanEntry<'a>>, PlanError> {
    if lines.is_empty() {
        return Err(PlanError::Empty);
    }

    lines
        .iter()
        .map(|line| {
            let recipe = match &line.recipe {
                RecipeRef::Id(id) => catalog.recipe(RecipeId::new(*id)),
                RecipeRef::Name(name) => catalog.resolve_recipe(name),
            }
            .ok_or_else(|| PlanError::UnknownRecipe(line.recipe.to_string()))?;

            if line.target <= 0 {
                return Err(PlanError::NonPositiveTarget {
                    recipe: recipe.name.clone(),
                    target: line.target,
                });
            }
            Ok(PlanEntry::new(recipe, line.target))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn catalog() -> Catalog {
        Catalog::new(
            Vec::new(),
            vec![
                Recipe::new(RecipeId::new(1), "Bread", 10),
                Recipe::new(RecipeId::new(2), "Brownies", 12),
            ],
        )
    }

    fn line(recipe: RecipeRef, target: i32) -> PlanLine {
        PlanLine { recipe, target }
    }

    #[test]
    fn test_plan_yaml_accepts_ids_and_names() {
        let lines: Vec<PlanLine> =
            serde_yaml::from_str("- recipe: 1\n  target: 5\n- recipe: bread\n  target: 3\n")
                .unwrap();
        assert_eq!(lines[0].recipe, RecipeRef::Id(1));
        assert_eq!(lines[1].recipe, RecipeRef::Name("bread".to_owned()));

        let catalog = catalog();
        let plan = resolve_plan(&catalog, &lines).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].recipe.id, RecipeId::new(1));
        assert_eq!(plan[1].target_qty, 3);
    }

    #[test]
    fn test_quoted_number_is_tried_as_id() {
        let lines: Vec<PlanLine> = serde_yaml::from_str("- recipe: \"2\"\n  target: 1\n").unwrap();
        assert_eq!(lines[0].recipe, RecipeRef::Name("2".to_owned()));

        let catalog = catalog();
        let plan = resolve_plan(&catalog, &lines).unwrap();
        assert_eq!(plan[0].recipe.name, "Brownies");
    }

    #[test]
    fn test_unknown_recipe() {
        let catalog = catalog();
        assert_eq!(
            resolve_plan(&catalog, &[line(RecipeRef::Id(9), 1)]).unwrap_err(),
            PlanError::UnknownRecipe("#9".to_owned())
        );
        assert_eq!(
            resolve_plan(&catalog, &[line(RecipeRef::Name("Croissant".to_owned()), 1)])
                .unwrap_err(),
            PlanError::UnknownRecipe("Croissant".to_owned())
        );
    }

    #[test]
    fn test_non_positive_target() {
        let catalog = catalog();
        for target in [0, -4] {
            assert_eq!(
                resolve_plan(&catalog, &[line(RecipeRef::Name("Bread".to_owned()), target)])
                    .unwrap_err(),
                PlanError::NonPositiveTarget {
                    recipe: "Bread".to_owned(),
                    target
                }
            );
        }
    }

    #[test]
    fn test_empty_plan() {
        assert_eq!(resolve_plan(&catalog(), &[]).unwrap_err(), PlanError::Empty);
    }
}
