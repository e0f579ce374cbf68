use crate::collection::{Document, RecipeId};
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// A dynamically typed value stored in a [Document].
///
/// The variants mirror what a JSON recipe payload can carry, plus [RecipeId]
/// for identifiers assigned by the store. Values are (de)serialized without a
/// tag, so `Value` reads and writes plain JSON. Identifiers travel as strings
/// on the wire and come back as [Value::String]; the query normalizer turns
/// them into [Value::Id] where the schema says so.
///
/// Integer and float values compare equal when they denote the same number,
/// so `Value::I64(2) == Value::F64(2.0)`.
#[derive(Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    Id(RecipeId),
    Array(Vec<Value>),
    Document(Document),
}

impl Value {
    /// Returns the value as a float if it is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::I64(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&String> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_string().map(|s| s.as_str())
    }

    pub fn as_id(&self) -> Option<&RecipeId> {
        match self {
            Value::Id(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::I64(_) | Value::F64(_))
    }

    pub fn is_id(&self) -> bool {
        matches!(self, Value::Id(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::I64(_) | Value::F64(_) => "number",
            Value::String(_) => "string",
            Value::Id(_) => "identifier",
            Value::Array(_) => "array",
            Value::Document(_) => "document",
        }
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "<unprintable>".to_string())
    }
}

fn number_bits(value: f64) -> u64 {
    // 0.0 and -0.0 compare equal, so they must hash alike
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

fn num_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::I64(_), Value::F64(_)) | (Value::F64(_), Value::I64(_)) | (Value::F64(_), Value::F64(_)) => {
                match (self.as_number(), other.as_number()) {
                    (Some(a), Some(b)) => num_eq(a, b),
                    _ => false,
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Id(a), Value::Id(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Document(a), Value::Document(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => "null_value".hash(state),
            Value::Bool(v) => v.hash(state),
            Value::I64(v) => number_bits(*v as f64).hash(state),
            Value::F64(v) => number_bits(*v).hash(state),
            Value::String(v) => v.hash(state),
            Value::Id(v) => v.hash(state),
            Value::Array(v) => v.hash(state),
            Value::Document(v) => v.hash(state),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(v) => write!(f, "Bool({})", v),
            Value::I64(v) => write!(f, "I64({})", v),
            Value::F64(v) => write!(f, "F64({})", v),
            Value::String(v) => write!(f, "String({:?})", v),
            Value::Id(v) => write!(f, "Id({})", v),
            Value::Array(v) => f.debug_list().entries(v.iter()).finish(),
            Value::Document(v) => write!(f, "{:?}", v),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::I64(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<RecipeId> for Value {
    fn from(value: RecipeId) -> Self {
        Value::Id(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
