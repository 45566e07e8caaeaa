//! Schema definition model for nested columnar data.
//!
//! Re-exports [`colschema_core`] and, with the `arrow` feature (enabled by
//! default), [`colschema_arrow`].

#[cfg(feature = "arrow")]
pub use colschema_arrow as arrow;
pub use colschema_core as core;
pub use colschema_core::{
    BitWidth, ElementBuilder, Field, FieldType, Fields, IntType, Precision, Schema, SchemaBuilder,
    SchemaError,
};
