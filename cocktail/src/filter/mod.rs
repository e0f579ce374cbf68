//! The store-level query language.
//!
//! A [QuerySpec] maps field paths to [Criterion]s, each either an exact value
//! or a compiled [Pattern]. Specs are produced by the query normalizer and
//! evaluated by document stores.

mod criterion;
mod pattern;
mod query_spec;

pub use criterion::*;
pub use pattern::*;
pub use query_spec::*;
