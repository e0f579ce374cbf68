//! The recipe record, its collection schema and payload validation.

mod model;
mod schema;
mod update;

pub use model::*;
pub use schema::*;
pub use update::*;
