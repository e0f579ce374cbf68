use indexmap::IndexMap;

use crate::collection::RecipeId;
use crate::common::{Value, FIELD_SEPARATOR};
use crate::errors::{ErrorKind, RecipeError, RecipeResult};
use crate::filter::{Criterion, QuerySpec};
use crate::query::{compose, FieldType, QueryOptions, Schema, Selection};

/// A caller-supplied query: field paths mapped to raw values.
pub type RawQuery = IndexMap<String, Value>;

/// Turns a raw query into a [QuerySpec] the store can evaluate.
///
/// Per field, according to the schema:
/// - the identifier must be a well-formed [RecipeId] and is matched exactly;
/// - string fields become patterns built with `options`;
/// - number fields are matched exactly, textual numbers are parsed first;
/// - everything else, including unknown fields, is matched exactly as given.
///
/// A field path with an empty segment or a negative array index is an
/// [ErrorKind::InvalidArgument], whatever the schema says about it.
pub fn normalize(schema: &Schema, raw: &RawQuery, options: &QueryOptions) -> RecipeResult<QuerySpec> {
    let mut spec = QuerySpec::new();
    for (field, value) in raw {
        validate_path(field)?;
        let criterion = match schema.resolve_type(field) {
            Some(FieldType::Identifier) => Criterion::Exact(Value::Id(identifier_value(value)?)),
            Some(FieldType::String) => {
                let Some(text) = value.as_str() else {
                    log::error!("Field '{}' expects a string but got {}", field, value);
                    return Err(RecipeError::new(
                        &format!("Field '{}' expects a string but got {}", field, value.type_name()),
                        ErrorKind::InvalidArgument,
                    ));
                };
                Criterion::Pattern(compose(text, options)?)
            }
            Some(FieldType::Number) => Criterion::Exact(number_value(field, value)?),
            _ => Criterion::Exact(value.clone()),
        };
        spec.insert(field.clone(), criterion);
    }

    log::debug!("Normalized query into {}", spec);
    Ok(spec)
}

/// Normalizes a [Selection], rejecting substring matches on fields the
/// schema declares as something other than text.
pub fn normalize_selection(schema: &Schema, selection: &Selection) -> RecipeResult<QuerySpec> {
    if selection.is_substring() {
        for field in selection.query().keys() {
            match schema.resolve_type(field) {
                Some(FieldType::String) | None => {}
                Some(field_type) => {
                    log::error!("Substring match is not supported on {} field '{}'", field_type, field);
                    return Err(RecipeError::new(
                        &format!("Substring match is not supported on {} field '{}'", field_type, field),
                        ErrorKind::InvalidArgument,
                    ));
                }
            }
        }
    }
    normalize(schema, selection.query(), selection.options())
}

fn validate_path(field: &str) -> RecipeResult<()> {
    for segment in field.split(FIELD_SEPARATOR) {
        if segment.is_empty() {
            log::error!("Field path '{}' has an empty segment", field);
            return Err(RecipeError::new(
                &format!("Field path '{}' has an empty segment", field),
                ErrorKind::InvalidArgument,
            ));
        }
        if matches!(segment.parse::<i64>(), Ok(index) if index < 0) {
            log::error!("Field path '{}' has a negative array index {}", field, segment);
            return Err(RecipeError::new(
                &format!("Field path '{}' has a negative array index {}", field, segment),
                ErrorKind::InvalidArgument,
            ));
        }
    }
    Ok(())
}

fn identifier_value(value: &Value) -> RecipeResult<RecipeId> {
    match value {
        Value::Id(id) => Ok(*id),
        Value::String(text) => RecipeId::parse(text),
        other => {
            log::error!("Invalid recipe id {}", other);
            Err(RecipeError::new(
                &format!("Invalid recipe id {}", other),
                ErrorKind::InvalidArgument,
            ))
        }
    }
}

fn number_value(field: &str, value: &Value) -> RecipeResult<Value> {
    match value {
        Value::I64(_) | Value::F64(_) => Ok(value.clone()),
        Value::String(text) => {
            let number = text.trim().parse::<f64>().map_err(|_| {
                log::error!("Field '{}' expects a number but got '{}'", field, text);
                RecipeError::new(
                    &format!("Field '{}' expects a number but got '{}'", field, text),
                    ErrorKind::InvalidArgument,
                )
            })?;
            Ok(Value::F64(number))
        }
        other => {
            log::error!("Field '{}' expects a number but got {}", field, other);
            Err(RecipeError::new(
                &format!("Field '{}' expects a number but got {}", field, other.type_name()),
                ErrorKind::InvalidArgument,
            ))
        }
    }
}
