use std::ops::Deref;
use std::sync::Arc;

use crate::collection::{Document, UpdateOptions, WriteResult};
use crate::common::Value;
use crate::errors::RecipeResult;
use crate::filter::QuerySpec;

/// Interface of a document store holding recipe documents.
///
/// Stores evaluate already-normalized [QuerySpec]s and know nothing about the
/// recipe schema. Implementations must be safe to share between threads.
pub trait DocumentStoreProvider: Send + Sync {
    /// Stores a new document, assigning it a fresh id. Any `_id` already on
    /// the document is replaced. Returns the stored document.
    fn insert(&self, document: Document) -> RecipeResult<Document>;

    /// All documents matching `spec`, in insertion order.
    fn find(&self, spec: &QuerySpec) -> RecipeResult<Vec<Document>>;

    /// The first document matching `spec`, if any.
    fn find_one(&self, spec: &QuerySpec) -> RecipeResult<Option<Document>> {
        Ok(self.find(spec)?.into_iter().next())
    }

    /// Number of documents matching `spec`.
    fn count(&self, spec: &QuerySpec) -> RecipeResult<usize> {
        Ok(self.find(spec)?.len())
    }

    /// Sets every top-level field of `changes` on the matching documents.
    ///
    /// The `_id` of a stored document is never overwritten. Only documents
    /// whose content actually changed are reported as affected.
    fn update(
        &self,
        spec: &QuerySpec,
        changes: &Document,
        update_options: &UpdateOptions,
    ) -> RecipeResult<WriteResult>;

    /// Removes matching documents, or only the first one if `just_once`.
    fn remove(&self, spec: &QuerySpec, just_once: bool) -> RecipeResult<WriteResult>;

    /// Values found under `field` across all documents, without duplicates.
    fn distinct(&self, field: &str) -> RecipeResult<Vec<Value>>;

    /// Human readable store name, used in logs.
    fn name(&self) -> String;
}

/// Shared handle to a [DocumentStoreProvider].
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<dyn DocumentStoreProvider>,
}

impl DocumentStore {
    pub fn new<T: DocumentStoreProvider + 'static>(inner: T) -> Self {
        DocumentStore {
            inner: Arc::new(inner),
        }
    }
}

impl Deref for DocumentStore {
    type Target = Arc<dyn DocumentStoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
