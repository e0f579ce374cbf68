use crate::common::*;
use crate::query::{FieldType, Schema};

/// The field table of the recipe collection.
pub fn recipe_schema() -> Schema {
    let ingredient = Schema::embedded()
        .field(INGREDIENT_NAME, FieldType::String)
        .field(INGREDIENT_AMOUNT, FieldType::Number)
        .field(INGREDIENT_UNIT, FieldType::String)
        .field(INGREDIENT_LABEL, FieldType::String)
        .field(INGREDIENT_SPECIAL, FieldType::String);

    Schema::new(DOC_ID)
        .field(RECIPE_NAME, FieldType::String)
        .field(RECIPE_CATEGORY, FieldType::String)
        .field(RECIPE_GLASS, FieldType::String)
        .field(RECIPE_GARNISH, FieldType::String)
        .field(RECIPE_IMAGE, FieldType::String)
        .field(RECIPE_PREPARATION, FieldType::String)
        .embedded_array(RECIPE_INGREDIENTS, ingredient)
}

/// Maps a user-facing field name to its document path.
///
/// `id` becomes `_id` and ingredient fields are addressed through the
/// `ingredients` array; other names are returned unchanged.
pub fn field_path(name: &str) -> String {
    if name == "id" {
        DOC_ID.to_string()
    } else if INGREDIENT_FIELDS.contains(&name) {
        format!("{}{}{}", RECIPE_INGREDIENTS, FIELD_SEPARATOR, name)
    } else {
        name.to_string()
    }
}
