//! Immutable, recursively nested schema tree.

mod display;
mod format;
mod json;
mod types;

pub use format::format_fields;
pub use json::MAX_NESTING_DEPTH;
pub use types::{BitWidth, Field, FieldType, Fields, IntType, Precision, Schema};
