use serde::{Deserialize, Serialize};

use crate::collection::{Document, RecipeId};
use crate::common::DOC_ID;
use crate::errors::{ErrorKind, RecipeError, RecipeResult};

/// A cocktail recipe as clients create it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garnish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// One line of a recipe: a measured ingredient or a free-form special one.
///
/// The variant is decided by the fields present: anything carrying an
/// `ingredient` name is measured, a lone `special` text is special.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Measured {
        ingredient: String,
        #[serde(default)]
        amount: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Special {
        special: String,
    },
}

impl Ingredient {
    fn validate(&self, position: usize) -> RecipeResult<()> {
        match self {
            Ingredient::Measured { ingredient, amount, .. } => {
                if ingredient.trim().is_empty() {
                    return Err(invalid(&format!("Ingredient {} has an empty name", position)));
                }
                if !amount.is_finite() || *amount < 0.0 {
                    return Err(invalid(&format!(
                        "Ingredient '{}' has an invalid amount {}",
                        ingredient, amount
                    )));
                }
                Ok(())
            }
            Ingredient::Special { special } => {
                if special.trim().is_empty() {
                    return Err(invalid(&format!("Ingredient {} has an empty special text", position)));
                }
                Ok(())
            }
        }
    }
}

impl Recipe {
    pub fn new(name: &str) -> Self {
        Recipe {
            id: None,
            name: name.to_string(),
            category: None,
            glass: None,
            garnish: None,
            image: None,
            preparation: None,
            ingredients: Vec::new(),
        }
    }

    /// Reads a recipe from a client payload, ignoring any `_id` it carries.
    pub fn from_payload(payload: &Document) -> RecipeResult<Recipe> {
        let json = serde_json::to_value(payload.without_id())?;
        let recipe: Recipe = serde_json::from_value(json).map_err(|e| {
            log::error!("Invalid recipe payload: {}", e);
            invalid(&format!("Invalid recipe payload: {}", e))
        })?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> RecipeResult<()> {
        if self.name.trim().is_empty() {
            log::error!("Recipe name is required");
            return Err(invalid("Recipe name is required"));
        }
        for (position, ingredient) in self.ingredients.iter().enumerate() {
            ingredient.validate(position).inspect_err(|e| log::error!("{}", e))?;
        }
        Ok(())
    }

    pub fn to_document(&self) -> RecipeResult<Document> {
        let mut json = serde_json::to_value(self)?;
        if let Some(map) = json.as_object_mut() {
            map.remove(DOC_ID);
        }

        let mut document: Document = serde_json::from_value(json)?;
        if let Some(id) = self.id {
            document.set_id(id);
        }
        Ok(document)
    }
}

pub(crate) fn invalid(message: &str) -> RecipeError {
    RecipeError::new(message, ErrorKind::InvalidArgument)
}
