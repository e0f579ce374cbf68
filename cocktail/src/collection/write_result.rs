use crate::collection::RecipeId;

/// Outcome of a store write.
///
/// `matched_count` counts documents selected by the query; `affected_ids`
/// lists the ones actually inserted, changed or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteResult {
    matched_count: usize,
    affected_ids: Vec<RecipeId>,
}

impl WriteResult {
    pub fn new(matched_count: usize, affected_ids: Vec<RecipeId>) -> Self {
        Self {
            matched_count,
            affected_ids,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn affected_count(&self) -> usize {
        self.affected_ids.len()
    }

    pub fn affected_ids(&self) -> &[RecipeId] {
        &self.affected_ids
    }
}

impl IntoIterator for WriteResult {
    type Item = RecipeId;
    type IntoIter = std::vec::IntoIter<RecipeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.affected_ids.into_iter()
    }
}
