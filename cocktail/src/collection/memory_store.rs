use indexmap::IndexMap;
use itertools::Itertools;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::collection::{Document, DocumentStoreProvider, RecipeId, UpdateOptions, WriteResult};
use crate::common::{Value, DOC_ID};
use crate::errors::RecipeResult;
use crate::filter::QuerySpec;

/// Document store kept entirely in memory.
///
/// Documents are held in insertion order behind a single reader-writer lock,
/// so every operation sees a consistent snapshot. All data is lost when the
/// last handle is dropped.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            inner: Arc::new(InMemoryStoreInner::default()),
        }
    }

    /// Number of documents currently stored.
    pub fn size(&self) -> usize {
        self.inner.documents.read().len()
    }
}

impl DocumentStoreProvider for InMemoryStore {
    fn insert(&self, document: Document) -> RecipeResult<Document> {
        self.inner.insert(document)
    }

    fn find(&self, spec: &QuerySpec) -> RecipeResult<Vec<Document>> {
        self.inner.find(spec)
    }

    fn find_one(&self, spec: &QuerySpec) -> RecipeResult<Option<Document>> {
        self.inner.find_one(spec)
    }

    fn count(&self, spec: &QuerySpec) -> RecipeResult<usize> {
        self.inner.count(spec)
    }

    fn update(
        &self,
        spec: &QuerySpec,
        changes: &Document,
        update_options: &UpdateOptions,
    ) -> RecipeResult<WriteResult> {
        self.inner.update(spec, changes, update_options)
    }

    fn remove(&self, spec: &QuerySpec, just_once: bool) -> RecipeResult<WriteResult> {
        self.inner.remove(spec, just_once)
    }

    fn distinct(&self, field: &str) -> RecipeResult<Vec<Value>> {
        self.inner.distinct(field)
    }

    fn name(&self) -> String {
        "in-memory".to_string()
    }
}

#[derive(Default)]
struct InMemoryStoreInner {
    documents: RwLock<IndexMap<RecipeId, Document>>,
}

impl InMemoryStoreInner {
    fn insert(&self, document: Document) -> RecipeResult<Document> {
        let mut document = document.without_id();
        let id = RecipeId::new();
        document.set_id(id);

        self.documents.write().insert(id, document.clone());
        log::debug!("Inserted document {}", id);
        Ok(document)
    }

    fn find(&self, spec: &QuerySpec) -> RecipeResult<Vec<Document>> {
        let documents = self.documents.read();
        let mut results = Vec::new();
        for document in documents.values() {
            if spec.matches(document)? {
                results.push(document.clone());
            }
        }
        Ok(results)
    }

    fn find_one(&self, spec: &QuerySpec) -> RecipeResult<Option<Document>> {
        let documents = self.documents.read();
        for document in documents.values() {
            if spec.matches(document)? {
                return Ok(Some(document.clone()));
            }
        }
        Ok(None)
    }

    fn count(&self, spec: &QuerySpec) -> RecipeResult<usize> {
        let documents = self.documents.read();
        let mut count = 0;
        for document in documents.values() {
            if spec.matches(document)? {
                count += 1;
            }
        }
        Ok(count)
    }

    fn update(
        &self,
        spec: &QuerySpec,
        changes: &Document,
        update_options: &UpdateOptions,
    ) -> RecipeResult<WriteResult> {
        let mut documents = self.documents.write();
        let mut matched = 0;
        let mut modified = Vec::new();

        for (id, document) in documents.iter_mut() {
            if !spec.matches(document)? {
                continue;
            }
            matched += 1;

            let mut updated = document.clone();
            for (key, value) in changes.iter() {
                if key != DOC_ID {
                    updated.put(key.as_str(), value.clone())?;
                }
            }

            if updated != *document {
                *document = updated;
                modified.push(*id);
            }

            if update_options.is_just_once() {
                break;
            }
        }

        log::debug!("Update on {} matched {} and modified {}", spec, matched, modified.len());
        Ok(WriteResult::new(matched, modified))
    }

    fn remove(&self, spec: &QuerySpec, just_once: bool) -> RecipeResult<WriteResult> {
        let mut documents = self.documents.write();
        let mut removed = Vec::new();

        for (id, document) in documents.iter() {
            if spec.matches(document)? {
                removed.push(*id);
                if just_once {
                    break;
                }
            }
        }

        for id in &removed {
            documents.shift_remove(id);
        }

        log::debug!("Remove on {} deleted {}", spec, removed.len());
        Ok(WriteResult::new(removed.len(), removed))
    }

    fn distinct(&self, field: &str) -> RecipeResult<Vec<Value>> {
        let documents = self.documents.read();
        let mut values = Vec::new();
        for document in documents.values() {
            match document.get(field)? {
                Value::Null => {}
                Value::Array(items) => values.extend(items.into_iter().filter(|v| !v.is_null())),
                value => values.push(value),
            }
        }
        Ok(values.into_iter().unique().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::just_once;
    use crate::doc;
    use crate::filter::{Criterion, Pattern};

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert(doc! { name: "Margarita", glass: "Cocktail" }).unwrap();
        store.insert(doc! { name: "Mojito", glass: "Highball" }).unwrap();
        store.insert(doc! { name: "Gimlet", glass: "Cocktail" }).unwrap();
        store
    }

    fn glass(value: &str) -> QuerySpec {
        QuerySpec::new().with("glass", Criterion::Exact(Value::from(value)))
    }

    #[test]
    fn test_insert_assigns_fresh_id() {
        let store = InMemoryStore::new();
        let mut document = doc! { name: "Negroni" };
        document.set_id(RecipeId::create_id(1000000000000000001).unwrap());

        let stored = store.insert(document).unwrap();
        let id = stored.id().unwrap();
        assert_ne!(id.id_value(), 1000000000000000001);
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn test_find_preserves_insertion_order() {
        let store = seeded_store();
        let names: Vec<Value> = store
            .find(&QuerySpec::new())
            .unwrap()
            .iter()
            .map(|d| d.get("name").unwrap())
            .collect();
        assert_eq!(names, vec![Value::from("Margarita"), Value::from("Mojito"), Value::from("Gimlet")]);
    }

    #[test]
    fn test_find_one_and_count() {
        let store = seeded_store();
        let first = store.find_one(&glass("Cocktail")).unwrap().unwrap();
        assert_eq!(first.get("name").unwrap(), Value::from("Margarita"));
        assert_eq!(store.count(&glass("Cocktail")).unwrap(), 2);
        assert!(store.find_one(&glass("Flute")).unwrap().is_none());
    }

    #[test]
    fn test_update_many_and_once() {
        let store = seeded_store();
        let changes = doc! { glass: "Coupe" };

        let result = store.update(&glass("Cocktail"), &changes, &just_once()).unwrap();
        assert_eq!(result.matched_count(), 1);
        assert_eq!(result.affected_count(), 1);

        let result = store.update(&glass("Cocktail"), &changes, &UpdateOptions::default()).unwrap();
        assert_eq!(result.affected_count(), 1);
        assert_eq!(store.count(&glass("Coupe")).unwrap(), 2);
    }

    #[test]
    fn test_update_unchanged_is_not_modified() {
        let store = seeded_store();
        let result = store
            .update(&glass("Highball"), &doc! { glass: "Highball" }, &UpdateOptions::default())
            .unwrap();
        assert_eq!(result.matched_count(), 1);
        assert_eq!(result.affected_count(), 0);
    }

    #[test]
    fn test_update_never_touches_id() {
        let store = seeded_store();
        let before = store.find_one(&glass("Highball")).unwrap().unwrap();
        let mut changes = doc! { garnish: "Mint" };
        changes.set_id(RecipeId::new());

        store.update(&glass("Highball"), &changes, &UpdateOptions::default()).unwrap();
        let after = store.find_one(&glass("Highball")).unwrap().unwrap();
        assert_eq!(before.id(), after.id());
        assert_eq!(after.get("garnish").unwrap(), Value::from("Mint"));
    }

    #[test]
    fn test_remove() {
        let store = seeded_store();
        let result = store.remove(&glass("Cocktail"), true).unwrap();
        assert_eq!(result.affected_count(), 1);
        assert_eq!(store.size(), 2);

        let result = store.remove(&QuerySpec::new(), false).unwrap();
        assert_eq!(result.affected_count(), 2);
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn test_distinct_flattens_and_dedupes() {
        let store = InMemoryStore::new();
        store.insert(doc! { ingredients: [{ unit: "oz" }, { unit: "dash" }] }).unwrap();
        store.insert(doc! { ingredients: [{ unit: "oz" }, { special: "Salt" }] }).unwrap();

        let units = store.distinct("ingredients.unit").unwrap();
        assert_eq!(units, vec![Value::from("oz"), Value::from("dash")]);
    }

    #[test]
    fn test_pattern_query() {
        let store = seeded_store();
        let spec = QuerySpec::new().with("name", Criterion::Pattern(Pattern::new("^m", true).unwrap()));
        assert_eq!(store.count(&spec).unwrap(), 2);
    }
}
