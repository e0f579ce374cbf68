//! Shared building blocks: field-name constants and the dynamic [Value] type
//! stored inside documents.

mod constants;
mod value;

pub use constants::*;
pub use value::*;
