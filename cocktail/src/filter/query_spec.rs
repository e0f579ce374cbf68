use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt::Display;

use crate::collection::Document;
use crate::errors::RecipeResult;
use crate::filter::Criterion;

/// A normalized, store-ready query: every entry must hold for a document to
/// match. An empty spec matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    criteria: IndexMap<String, Criterion>,
}

impl QuerySpec {
    pub fn new() -> Self {
        QuerySpec {
            criteria: IndexMap::new(),
        }
    }

    /// Adds or replaces the criterion for `field`.
    pub fn insert(&mut self, field: impl Into<String>, criterion: Criterion) {
        self.criteria.insert(field.into(), criterion);
    }

    pub fn with(mut self, field: impl Into<String>, criterion: Criterion) -> Self {
        self.insert(field, criterion);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Criterion> {
        self.criteria.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Criterion)> {
        self.criteria.iter()
    }

    /// Evaluates the spec against a stored document.
    pub fn matches(&self, document: &Document) -> RecipeResult<bool> {
        for (field, criterion) in &self.criteria {
            let value = document.get(field)?;
            if !criterion.matches(&value) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Display for QuerySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.criteria.is_empty() {
            return write!(f, "(all)");
        }
        let parts = self
            .criteria
            .iter()
            .map(|(field, criterion)| format!("({} {})", field, criterion))
            .join(" && ");
        write!(f, "{}", parts)
    }
}
