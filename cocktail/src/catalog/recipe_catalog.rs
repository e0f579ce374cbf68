use std::sync::Arc;

use serde::Serialize;

use crate::catalog::CatalogBuilder;
use crate::collection::{Document, DocumentStore, UpdateOptions, WriteResult};
use crate::common::{Value, COPY_SUFFIX, RECIPE_NAME};
use crate::errors::{ErrorKind, RecipeError, RecipeResult};
use crate::filter::QuerySpec;
use crate::query::{guard, normalize_selection, ExecutionResult, ProjectionField, Schema, Selection};
use crate::recipe::{sanitize_update, Recipe};

/// Summary of an update, as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub matched_count: usize,
    pub modified_count: usize,
}

impl From<WriteResult> for UpdateSummary {
    fn from(result: WriteResult) -> Self {
        UpdateSummary {
            matched_count: result.matched_count(),
            modified_count: result.affected_count(),
        }
    }
}

/// Summary of a delete, as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    pub deleted_count: usize,
}

impl From<WriteResult> for DeleteSummary {
    fn from(result: WriteResult) -> Self {
        DeleteSummary {
            deleted_count: result.affected_count(),
        }
    }
}

/// The recipe catalog: every read and write clients can perform.
///
/// Each operation normalizes its [Selection] against the schema, calls the
/// store and hands back an [ExecutionResult]. Validation failures are
/// reported before the store is touched, and no error or panic escapes an
/// operation.
///
/// Cloning is cheap; clones share the same store.
///
/// ```rust,ignore
/// let catalog = RecipeCatalog::builder().open()?;
/// let created = catalog.create_recipe(doc! { name: "Margarita" });
/// let found = catalog.find_all(&where_equal("name", "margarita", true, false));
/// ```
#[derive(Clone)]
pub struct RecipeCatalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    store: DocumentStore,
    schema: Schema,
}

impl RecipeCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub(crate) fn new(store: DocumentStore, schema: Schema) -> Self {
        log::info!("Opened recipe catalog on {} store", store.name());
        RecipeCatalog {
            inner: Arc::new(CatalogInner { store, schema }),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// All recipes matching `selection`, in store order.
    pub fn find_all(&self, selection: &Selection) -> ExecutionResult<Vec<Document>> {
        guard(|| {
            let spec = self.prepare(selection)?;
            self.inner.store.find(&spec)
        })
    }

    /// The first recipe matching `selection`, if any.
    pub fn find_one(&self, selection: &Selection) -> ExecutionResult<Option<Document>> {
        guard(|| {
            let spec = self.prepare(selection)?;
            self.inner.store.find_one(&spec)
        })
    }

    pub fn count_all(&self, selection: &Selection) -> ExecutionResult<usize> {
        guard(|| {
            let spec = self.prepare(selection)?;
            self.inner.store.count(&spec)
        })
    }

    /// Applies `payload` to the first matching recipe.
    pub fn update_one(&self, selection: &Selection, payload: &Document) -> ExecutionResult<UpdateSummary> {
        self.update(selection, payload, true)
    }

    /// Applies `payload` to every matching recipe.
    pub fn update_many(&self, selection: &Selection, payload: &Document) -> ExecutionResult<UpdateSummary> {
        self.update(selection, payload, false)
    }

    pub fn delete_one(&self, selection: &Selection) -> ExecutionResult<DeleteSummary> {
        self.delete(selection, true)
    }

    pub fn delete_many(&self, selection: &Selection) -> ExecutionResult<DeleteSummary> {
        self.delete(selection, false)
    }

    /// Validates `payload` as a recipe and stores it under a fresh id.
    pub fn create_recipe(&self, payload: &Document) -> ExecutionResult<Document> {
        guard(|| self.insert_recipe(payload))
    }

    /// Stores a copy of the first matching recipe, renamed with `" (Copy)"`
    /// until its name is unique. Fails with `404` if nothing matches.
    pub fn duplicate(&self, selection: &Selection) -> ExecutionResult<Document> {
        guard(|| {
            let spec = self.prepare(selection)?;
            let original = self.inner.store.find_one(&spec)?.ok_or_else(|| {
                log::error!("No recipe matches {} to duplicate", spec);
                RecipeError::new("Recipe to duplicate was not found", ErrorKind::NotFound).with_status(404)
            })?;

            let existing = self.inner.store.distinct(RECIPE_NAME)?;
            let mut name = original
                .get(RECIPE_NAME)?
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_default();
            loop {
                name.push_str(COPY_SUFFIX);
                if !existing.contains(&Value::from(name.as_str())) {
                    break;
                }
            }

            let mut copy = original.without_id();
            copy.put(RECIPE_NAME, name)?;
            let stored = self.inner.store.insert(copy)?;
            log::debug!("Duplicated recipe into {:?}", stored.id());
            Ok(stored)
        })
    }

    /// Lists `field` across the recipes matching `selection`.
    ///
    /// `field` is a user-facing name such as `name`, `id` or `unit`; unknown
    /// names fail before the store is queried.
    pub fn list(&self, selection: &Selection, field: &str, distinct: bool) -> ExecutionResult<Vec<Value>> {
        guard(|| {
            let projection = ProjectionField::parse(field)?;
            let spec = self.prepare(selection)?;
            let documents = self.inner.store.find(&spec)?;
            projection.extract(&documents, distinct)
        })
    }

    pub(crate) fn insert_recipe(&self, payload: &Document) -> RecipeResult<Document> {
        let recipe = Recipe::from_payload(payload)?;
        let document = recipe.to_document()?;
        self.inner.store.insert(document)
    }

    fn update(&self, selection: &Selection, payload: &Document, just_once: bool) -> ExecutionResult<UpdateSummary> {
        guard(|| {
            let spec = self.prepare(selection)?;
            let changes = sanitize_update(&self.inner.schema, payload)?;
            let result = self
                .inner
                .store
                .update(&spec, &changes, &UpdateOptions::new(just_once))?;
            Ok(UpdateSummary::from(result))
        })
    }

    fn delete(&self, selection: &Selection, just_once: bool) -> ExecutionResult<DeleteSummary> {
        guard(|| {
            let spec = self.prepare(selection)?;
            let result = self.inner.store.remove(&spec, just_once)?;
            Ok(DeleteSummary::from(result))
        })
    }

    fn prepare(&self, selection: &Selection) -> RecipeResult<QuerySpec> {
        normalize_selection(&self.inner.schema, selection)
    }
}
