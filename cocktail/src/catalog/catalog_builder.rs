use std::path::Path;

use crate::catalog::RecipeCatalog;
use crate::collection::{Document, DocumentStore, DocumentStoreProvider, InMemoryStore};
use crate::errors::{ErrorKind, RecipeError, RecipeResult};
use crate::query::Schema;
use crate::recipe::recipe_schema;

/// Builder for opening a [RecipeCatalog].
///
/// Setters capture the first configuration error, which is returned by
/// [CatalogBuilder::open]. By default the catalog uses an empty
/// [InMemoryStore] and the recipe schema.
///
/// ```rust,ignore
/// let catalog = RecipeCatalog::builder()
///     .seed_file("data/recipes.json")
///     .open()?;
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    error: Option<RecipeError>,
    store: Option<DocumentStore>,
    schema: Option<Schema>,
    seed: Vec<Document>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        CatalogBuilder::default()
    }

    /// Uses `store` instead of a fresh in-memory store.
    pub fn store<T: DocumentStoreProvider + 'static>(mut self, store: T) -> Self {
        self.store = Some(DocumentStore::new(store));
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Recipes to insert when the catalog opens.
    pub fn seed(mut self, recipes: Vec<Document>) -> Self {
        self.seed.extend(recipes);
        self
    }

    /// Reads seed recipes from a JSON file holding an array of recipe
    /// objects.
    pub fn seed_file(mut self, path: impl AsRef<Path>) -> Self {
        if self.error.is_none() {
            match read_seed_file(path.as_ref()) {
                Ok(recipes) => self.seed.extend(recipes),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Opens the catalog and inserts the seed recipes.
    ///
    /// Every seed recipe is validated like a created one; the first invalid
    /// recipe aborts the open.
    pub fn open(self) -> RecipeResult<RecipeCatalog> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let store = self
            .store
            .unwrap_or_else(|| DocumentStore::new(InMemoryStore::new()));
        let schema = self.schema.unwrap_or_else(recipe_schema);
        let catalog = RecipeCatalog::new(store, schema);

        for (position, payload) in self.seed.iter().enumerate() {
            catalog.insert_recipe(payload).map_err(|e| {
                log::error!("Invalid seed recipe at position {}: {}", position, e);
                RecipeError::new_with_cause(
                    &format!("Invalid seed recipe at position {}", position),
                    ErrorKind::InvalidArgument,
                    e,
                )
            })?;
        }
        if !self.seed.is_empty() {
            log::info!("Seeded catalog with {} recipes", self.seed.len());
        }
        Ok(catalog)
    }
}

fn read_seed_file(path: &Path) -> RecipeResult<Vec<Document>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read seed file {}: {}", path.display(), e);
        RecipeError::new_with_cause(
            &format!("Failed to read seed file {}", path.display()),
            ErrorKind::StoreError,
            RecipeError::from(e),
        )
    })?;

    let recipes: Vec<Document> = serde_json::from_str(&content).map_err(|e| {
        log::error!("Malformed seed file {}: {}", path.display(), e);
        RecipeError::new_with_cause(
            &format!("Malformed seed file {}", path.display()),
            ErrorKind::EncodingError,
            RecipeError::from(e),
        )
    })?;

    // validated on open, so a bad record reports its position
    Ok(recipes
        .into_iter()
        .map(|recipe| recipe.without_id())
        .collect())
}
