use serde::{Deserialize, Serialize};

/// Flags controlling how text values in a query are matched.
///
/// All flags default to `false`: case-sensitive, substring, accent-folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    case_insensitive: bool,
    match_whole: bool,
    accent_sensitive: bool,
}

impl QueryOptions {
    pub fn new(case_insensitive: bool, match_whole: bool, accent_sensitive: bool) -> Self {
        Self {
            case_insensitive,
            match_whole,
            accent_sensitive,
        }
    }

    /// Whether letter case is ignored.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether the pattern must cover the entire field value.
    pub fn is_match_whole(&self) -> bool {
        self.match_whole
    }

    /// Whether accented vowels must match exactly instead of being folded.
    pub fn is_accent_sensitive(&self) -> bool {
        self.accent_sensitive
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    pub fn match_whole(mut self, value: bool) -> Self {
        self.match_whole = value;
        self
    }

    pub fn accent_sensitive(mut self, value: bool) -> Self {
        self.accent_sensitive = value;
        self
    }
}
