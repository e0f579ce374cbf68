//! Schema-aware query construction and guarded execution.
//!
//! The pieces compose in one direction:
//!
//! - the pattern builder turns literal search terms into regexes;
//! - the [Schema] says which fields are text, numbers or identifiers;
//! - [normalize] combines both into a store-ready
//!   [QuerySpec](crate::filter::QuerySpec);
//! - [guard] runs the normalizer and the store call, catching every failure;
//! - [extract] lists a single field across results.

mod guard;
mod normalize;
mod options;
mod pattern_builder;
mod projection;
mod schema;
mod selection;

pub use guard::*;
pub use normalize::*;
pub use options::*;
pub use pattern_builder::*;
pub use projection::*;
pub use schema::*;
pub use selection::*;
