use crate::collection::Document;
use crate::common::{Value, RECIPE_INGREDIENTS, RECIPE_NAME};
use crate::errors::RecipeResult;
use crate::query::{FieldType, Schema};
use crate::recipe::model::invalid;
use crate::recipe::{Ingredient, Recipe};

/// Prepares a client update payload for the store.
///
/// The identifier is stripped, fields the schema does not declare are
/// dropped and declared fields are checked against their types. Ingredient
/// lists are validated like on create and stored in canonical form.
pub fn sanitize_update(schema: &Schema, payload: &Document) -> RecipeResult<Document> {
    let mut changes = Document::new();

    for (field, value) in payload.without_id().iter() {
        if !schema.is_declared(field) {
            log::debug!("Dropping undeclared field '{}' from update", field);
            continue;
        }

        let value = match schema.resolve_type(field) {
            Some(FieldType::String) => text_value(field, value)?,
            Some(FieldType::Number) if !value.is_number() => {
                log::error!("Field '{}' expects a number", field);
                return Err(invalid(&format!("Field '{}' expects a number", field)));
            }
            Some(FieldType::Array) if field == RECIPE_INGREDIENTS => ingredients_value(value)?,
            _ => value.clone(),
        };
        changes.put(field.as_str(), value)?;
    }

    Ok(changes)
}

fn text_value(field: &str, value: &Value) -> RecipeResult<Value> {
    match value {
        Value::String(text) if field == RECIPE_NAME && text.trim().is_empty() => {
            log::error!("Recipe name is required");
            Err(invalid("Recipe name is required"))
        }
        Value::String(_) => Ok(value.clone()),
        Value::Null if field != RECIPE_NAME => Ok(Value::Null),
        other => {
            log::error!("Field '{}' expects a string but got {}", field, other);
            Err(invalid(&format!(
                "Field '{}' expects a string but got {}",
                field,
                other.type_name()
            )))
        }
    }
}

fn ingredients_value(value: &Value) -> RecipeResult<Value> {
    let json = serde_json::to_value(value)?;
    let ingredients: Vec<Ingredient> = serde_json::from_value(json).map_err(|e| {
        log::error!("Invalid ingredients: {}", e);
        invalid(&format!("Invalid ingredients: {}", e))
    })?;

    let mut carrier = Recipe::new(RECIPE_NAME);
    carrier.ingredients = ingredients;
    carrier.validate()?;

    let canonical = carrier.to_document()?;
    canonical.get(RECIPE_INGREDIENTS)
}
