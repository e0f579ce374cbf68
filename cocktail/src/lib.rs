//! Core of the cocktail recipe catalog.
//!
//! Recipes are stored as schemaless [documents](collection::Document). Callers
//! describe what they want with a raw field/value [Selection](query::Selection)
//! and a few [QueryOptions](query::QueryOptions); the query layer turns that into a
//! schema-aware [QuerySpec](filter::QuerySpec) that matches identifiers exactly,
//! text fields by case- and accent-tolerant patterns, and numbers by value.
//!
//! Every operation of the [RecipeCatalog](catalog::RecipeCatalog) runs inside a
//! guard that converts failures and panics into an
//! [ExecutionResult](query::ExecutionResult) carrying either data or a typed
//! error payload, so the caller never sees a raw failure.
//!
//! ```rust,ignore
//! use cocktail::catalog::RecipeCatalog;
//! use cocktail::query::where_equal;
//!
//! let catalog = RecipeCatalog::builder().open()?;
//! let found = catalog.find_all(&where_equal("name", "Margarita", false, false));
//! ```

use crate::collection::snowflake::SnowflakeIdGenerator;
use std::sync::LazyLock;

pub mod catalog;
pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod query;
pub mod recipe;

pub(crate) static ID_GENERATOR: LazyLock<SnowflakeIdGenerator> =
    LazyLock::new(SnowflakeIdGenerator::new);
