use std::fmt::Display;

use crate::common::Value;
use crate::filter::Pattern;

/// What a single field of a stored document must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// The field value equals this value.
    Exact(Value),
    /// The field value is a string matched by this pattern.
    Pattern(Pattern),
}

impl Criterion {
    /// Tests a field value taken from a document.
    ///
    /// An array matches when the whole array equals an exact criterion or when
    /// any of its elements matches, so `ingredients.ingredient` criteria select
    /// recipes that contain at least one such ingredient.
    pub fn matches(&self, candidate: &Value) -> bool {
        match (self, candidate) {
            (Criterion::Exact(expected), Value::Array(items)) => {
                expected == candidate || items.iter().any(|item| item == expected)
            }
            (Criterion::Exact(expected), value) => expected == value,
            (Criterion::Pattern(pattern), Value::Array(items)) => items
                .iter()
                .any(|item| item.as_str().is_some_and(|text| pattern.is_match(text))),
            (Criterion::Pattern(pattern), Value::String(text)) => pattern.is_match(text),
            (Criterion::Pattern(_), _) => false,
        }
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Exact(value) => write!(f, "== {}", value),
            Criterion::Pattern(pattern) => write!(f, "=~ {}", pattern),
        }
    }
}
