use indexmap::IndexMap;
use std::fmt::Display;

use crate::common::FIELD_SEPARATOR;

/// Primitive type declared for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Identifier,
    Array,
    Other,
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Number => write!(f, "number"),
            FieldType::Identifier => write!(f, "identifier"),
            FieldType::Array => write!(f, "array"),
            FieldType::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FieldDefinition {
    Scalar(FieldType),
    EmbeddedArray(Schema),
}

/// Static field table of a document collection.
///
/// Top-level fields are scalars or arrays of embedded documents; the latter
/// carry their own nested schema so dotted paths such as `ingredients.amount`
/// resolve to the element field's type.
///
/// ```rust,ignore
/// let schema = Schema::new("_id")
///     .field("name", FieldType::String)
///     .embedded_array("ingredients", Schema::embedded().field("amount", FieldType::Number));
///
/// assert_eq!(schema.resolve_type("ingredients.amount"), Some(FieldType::Number));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    identifier: Option<String>,
    fields: IndexMap<String, FieldDefinition>,
}

impl Schema {
    /// A top-level schema whose documents are identified by `identifier_field`.
    pub fn new(identifier_field: &str) -> Self {
        Schema {
            identifier: Some(identifier_field.to_string()),
            fields: IndexMap::new(),
        }
    }

    /// A schema for documents embedded in an array; it has no identifier.
    pub fn embedded() -> Self {
        Schema::default()
    }

    pub fn field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.insert(name.to_string(), FieldDefinition::Scalar(field_type));
        self
    }

    pub fn embedded_array(mut self, name: &str, element: Schema) -> Self {
        self.fields
            .insert(name.to_string(), FieldDefinition::EmbeddedArray(element));
        self
    }

    pub fn identifier_field(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Declared type of `field`, or `None` if the schema does not know it.
    pub fn resolve_type(&self, field: &str) -> Option<FieldType> {
        if self.identifier.as_deref() == Some(field) {
            return Some(FieldType::Identifier);
        }

        match field.split_once(FIELD_SEPARATOR) {
            None => match self.fields.get(field)? {
                FieldDefinition::Scalar(field_type) => Some(*field_type),
                FieldDefinition::EmbeddedArray(_) => Some(FieldType::Array),
            },
            Some((head, rest)) => match self.fields.get(head)? {
                FieldDefinition::EmbeddedArray(element) => element.resolve_type(rest),
                FieldDefinition::Scalar(_) => None,
            },
        }
    }

    /// Whether `field` is the identifier or a declared top-level field.
    pub fn is_declared(&self, field: &str) -> bool {
        self.identifier.as_deref() == Some(field) || self.fields.contains_key(field)
    }

    /// Declared top-level fields, excluding the identifier.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }
}

/// Free-standing form of [Schema::resolve_type].
pub fn resolve_type(schema: &Schema, field: &str) -> Option<FieldType> {
    schema.resolve_type(field)
}
