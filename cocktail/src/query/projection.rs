use itertools::Itertools;

use crate::collection::Document;
use crate::common::{Value, DOC_ID, INGREDIENT_FIELDS, RECIPE_FIELDS, RECIPE_INGREDIENTS};
use crate::errors::{ErrorKind, RecipeError, RecipeResult};

/// A field that can be listed across a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionField {
    /// A top-level recipe field such as `name` or `_id`.
    Recipe(&'static str),
    /// A field of every ingredient such as `unit`.
    Ingredient(&'static str),
}

impl ProjectionField {
    /// Resolves a user-facing field name; `id` is accepted for `_id`.
    pub fn parse(name: &str) -> RecipeResult<Self> {
        let name = if name == "id" { DOC_ID } else { name };

        if let Some(field) = RECIPE_FIELDS.iter().copied().find(|f| *f == name) {
            return Ok(ProjectionField::Recipe(field));
        }
        if let Some(field) = INGREDIENT_FIELDS.iter().copied().find(|f| *f == name) {
            return Ok(ProjectionField::Ingredient(field));
        }

        log::error!("Cannot list unknown field '{}'", name);
        Err(RecipeError::new(
            &format!("Cannot list unknown field '{}'", name),
            ErrorKind::InvalidArgument,
        ))
    }

    /// Values of this field across `documents`, flattened one level.
    pub fn extract(&self, documents: &[Document], distinct: bool) -> RecipeResult<Vec<Value>> {
        let mut values = Vec::new();
        for document in documents {
            match self {
                ProjectionField::Recipe(field) => {
                    let value = document.get(field)?;
                    if !value.is_null() {
                        values.push(value);
                    }
                }
                ProjectionField::Ingredient(field) => {
                    let Value::Array(ingredients) = document.get(RECIPE_INGREDIENTS)? else {
                        continue;
                    };
                    for ingredient in ingredients.iter().filter_map(|v| v.as_document()) {
                        let value = ingredient.get(field)?;
                        if !value.is_null() {
                            values.push(value);
                        }
                    }
                }
            }
        }

        if distinct {
            Ok(values.into_iter().unique().collect())
        } else {
            Ok(values)
        }
    }
}

/// Lists `field` across `documents`, optionally without duplicates.
///
/// Order of distinct values is unspecified.
pub fn extract(documents: &[Document], field: &str, distinct: bool) -> RecipeResult<Vec<Value>> {
    ProjectionField::parse(field)?.extract(documents, distinct)
}
