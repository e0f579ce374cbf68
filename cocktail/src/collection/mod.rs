//! Recipe documents and the stores that hold them.
//!
//! A [Document] is a persistent map of field names to [Value](crate::common::Value)s
//! with dotted-path access into embedded documents and arrays:
//!
//! ```rust,ignore
//! use cocktail::collection::Document;
//!
//! let mut doc = Document::new();
//! doc.put("name", "Margarita")?;
//! let names = doc.get("ingredients.ingredient")?;
//! ```
//!
//! Stores implement [DocumentStoreProvider] and are shared through the
//! cloneable [DocumentStore] handle. [InMemoryStore] is the bundled
//! implementation.

mod document;
mod document_store;
mod memory_store;
mod recipe_id;
pub(crate) mod snowflake;
mod update_options;
mod write_result;

pub use document::*;
pub use document_store::*;
pub use memory_store::*;
pub use recipe_id::*;
pub use update_options::*;
pub use write_result::*;
