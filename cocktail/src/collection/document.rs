use im::OrdMap;
use smallvec::SmallVec;

use crate::collection::recipe_id::RecipeId;
use crate::common::{Value, DOC_ID, FIELD_SEPARATOR};
use crate::errors::{ErrorKind, RecipeError, RecipeResult};
use std::borrow::Cow;
use std::fmt::{Debug, Display};

type FieldVec = SmallVec<[String; 8]>;

/// A recipe document: string keys mapped to [Value]s.
///
/// Keys may address embedded values with the `.` separator, so
/// `document.get("ingredients.ingredient")` walks into the `ingredients`
/// array and collects the `ingredient` of every element. Numeric segments
/// index into arrays (`ingredients.0.amount`).
///
/// The `_id` field is reserved for the [RecipeId] assigned by the store and
/// cannot be set through [Document::put].
///
/// Backed by `im::OrdMap`, so clones are cheap and share structure.
#[derive(Clone, Eq, PartialEq, Hash, Default, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Associates `value` with `key`, creating embedded documents for dotted
    /// keys as needed.
    ///
    /// Fails for an empty key, or when `_id` is given anything but a [RecipeId].
    pub fn put<'a, T: Into<Value>>(&mut self, key: impl Into<Cow<'a, str>>, value: T) -> RecipeResult<()> {
        let key = key.into();
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(RecipeError::new(
                "Document does not support empty key",
                ErrorKind::InvalidArgument,
            ));
        }

        let value = value.into();
        if key == DOC_ID && !value.is_id() {
            log::error!("Document id is assigned by the store and cannot be set manually");
            return Err(RecipeError::new(
                "Document id is assigned by the store and cannot be set manually",
                ErrorKind::InvalidArgument,
            ));
        }

        if key.contains(FIELD_SEPARATOR) {
            let splits: Vec<&str> = key.split(FIELD_SEPARATOR).collect();
            self.deep_put(&splits, value)
        } else {
            self.data = self.data.update(key.to_string(), value);
            Ok(())
        }
    }

    /// Returns the value stored under `key`, or [Value::Null] if absent.
    ///
    /// Dotted keys walk embedded documents. A non-numeric segment applied to
    /// an array is applied to every element and the results are flattened,
    /// in element order, into a single [Value::Array].
    pub fn get(&self, key: &str) -> RecipeResult<Value> {
        match self.data.get(key) {
            Some(value) => Ok(value.clone()),
            None => {
                if key.contains(FIELD_SEPARATOR) {
                    self.get_by_embedded_key(key)
                } else {
                    Ok(Value::Null)
                }
            }
        }
    }

    /// The store-assigned identifier, if this document has been stored.
    pub fn id(&self) -> Option<RecipeId> {
        match self.data.get(DOC_ID) {
            Some(Value::Id(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn has_id(&self) -> bool {
        self.id().is_some()
    }

    /// Returns a copy of this document with the `_id` field removed.
    pub fn without_id(&self) -> Document {
        Document {
            data: self.data.without(DOC_ID),
        }
    }

    pub(crate) fn set_id(&mut self, id: RecipeId) {
        self.data = self.data.update(DOC_ID.to_string(), Value::Id(id));
    }

    /// Top-level field names, in key order.
    pub fn fields(&self) -> FieldVec {
        self.data.keys().cloned().collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    fn deep_put(&mut self, splits: &[&str], value: Value) -> RecipeResult<()> {
        let Some((key, remaining)) = splits.split_first() else {
            log::error!("Empty embedded key");
            return Err(RecipeError::new("Empty embedded key", ErrorKind::InvalidArgument));
        };

        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(RecipeError::new(
                "Document does not support empty key",
                ErrorKind::InvalidArgument,
            ));
        }

        if remaining.is_empty() {
            return self.put(*key, value);
        }

        let mut nested = match self.data.get(*key) {
            Some(Value::Document(obj)) => obj.clone(),
            _ => Document::new(),
        };
        let result = nested.deep_put(remaining, value);
        self.data = self.data.update(key.to_string(), Value::Document(nested));
        result
    }

    fn get_by_embedded_key(&self, key: &str) -> RecipeResult<Value> {
        let splits: Vec<&str> = key.split(FIELD_SEPARATOR).collect();
        let first = splits[0];
        if first.is_empty() {
            log::error!("Document does not support empty key");
            return Err(RecipeError::new(
                "Document does not support empty key",
                ErrorKind::InvalidArgument,
            ));
        }

        self.recursive_get(self.data.get(first), &splits[1..])
    }

    fn recursive_get(&self, value: Option<&Value>, splits: &[&str]) -> RecipeResult<Value> {
        let value = match value {
            None => return Ok(Value::Null),
            Some(v) => v,
        };

        let Some(key) = splits.first() else {
            return Ok(value.clone());
        };

        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(RecipeError::new(
                "Document does not support empty key",
                ErrorKind::InvalidArgument,
            ));
        }

        match value {
            Value::Document(obj) => self.recursive_get(obj.data.get(*key), &splits[1..]),
            Value::Array(arr) => {
                if let Ok(index) = key.parse::<isize>() {
                    if index < 0 {
                        log::error!("Invalid array index {} to access array inside a document", index);
                        return Err(RecipeError::new(
                            &format!("Invalid array index {} to access array inside a document", index),
                            ErrorKind::InvalidArgument,
                        ));
                    }

                    match arr.get(index as usize) {
                        Some(item) => self.recursive_get(Some(item), &splits[1..]),
                        None => Ok(Value::Null),
                    }
                } else {
                    self.decompose(arr, splits)
                }
            }
            _ => Ok(Value::Null),
        }
    }

    fn decompose(&self, arr: &[Value], splits: &[&str]) -> RecipeResult<Value> {
        let mut items: Vec<Value> = Vec::with_capacity(arr.len());

        for item in arr {
            match self.recursive_get(Some(item), splits)? {
                Value::Array(values) => items.extend(values),
                Value::Null => {}
                value => items.push(value),
            }
        }
        Ok(Value::Array(items))
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            data: iter.into_iter().collect(),
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] with JSON-like syntax.
///
/// ```rust
/// use cocktail::doc;
///
/// let margarita = doc! {
///     name: "Margarita",
///     glass: "Cocktail",
///     ingredients: [
///         { ingredient: "Tequila", amount: 1.5, unit: "oz" },
///         { special: "Salt rim" }
///     ]
/// };
/// ```
///
/// # Panics
///
/// Panics if a key is rejected by [Document::put], such as `_id`.
#[macro_export]
macro_rules! doc {
    ({}) => {
        $crate::collection::Document::new()
    };

    () => {
        $crate::collection::Document::new()
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Converts a `doc!` value token into a [Value](crate::common::Value).
#[macro_export]
macro_rules! doc_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
