//! The recipe catalog and its builder.

mod catalog_builder;
mod recipe_catalog;

pub use catalog_builder::*;
pub use recipe_catalog::*;
