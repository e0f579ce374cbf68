use regex::{Regex, RegexBuilder};
use std::fmt::{Debug, Display};

use crate::errors::RecipeResult;

/// A compiled regular expression used as a query criterion.
///
/// Keeps the source text and flag alongside the compiled [Regex] so a pattern
/// can be compared, logged and reported the way it was built.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source`, optionally ignoring case.
    pub fn new(source: &str, case_insensitive: bool) -> RecipeResult<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()
            .inspect_err(|e| log::error!("Invalid regex pattern '{}': {}", source, e))?;

        Ok(Pattern {
            source: source.to_string(),
            case_insensitive,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Flag string in the conventional `/source/flags` notation.
    pub fn flags(&self) -> &'static str {
        if self.case_insensitive {
            "i"
        } else {
            ""
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for Pattern {}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags())
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({})", self)
    }
}
