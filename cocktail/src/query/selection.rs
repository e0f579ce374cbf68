use crate::common::Value;
use crate::query::{QueryOptions, RawQuery};

/// A raw query together with the options it is evaluated with.
///
/// Selections are what catalog operations accept; they are normalized
/// against the schema only when the operation runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    query: RawQuery,
    options: QueryOptions,
    substring: bool,
}

impl Selection {
    pub fn new(query: RawQuery, options: QueryOptions) -> Self {
        Selection {
            query,
            options,
            substring: false,
        }
    }

    /// Selects every document.
    pub fn all() -> Self {
        Selection::default()
    }

    pub fn query(&self) -> &RawQuery {
        &self.query
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Whether this selection asks for substring matches, which only text
    /// fields support.
    pub fn is_substring(&self) -> bool {
        self.substring
    }
}

/// Selects documents whose `key` equals `value` as a whole.
pub fn where_equal(
    key: &str,
    value: impl Into<Value>,
    case_insensitive: bool,
    accent_sensitive: bool,
) -> Selection {
    let mut query = RawQuery::new();
    query.insert(key.to_string(), value.into());
    Selection::new(
        query,
        QueryOptions::new(case_insensitive, true, accent_sensitive),
    )
}

/// Selects documents whose text field `key` contains `value`.
pub fn where_contains(
    key: &str,
    value: impl Into<Value>,
    case_insensitive: bool,
    accent_sensitive: bool,
) -> Selection {
    let mut query = RawQuery::new();
    query.insert(key.to_string(), value.into());
    Selection {
        query,
        options: QueryOptions::new(case_insensitive, false, accent_sensitive),
        substring: true,
    }
}
