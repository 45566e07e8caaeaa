//! Arrow integration layer for `colschema`.
//!
//! Downstream Arrow readers and writers consume schemas as
//! `arrow::datatypes::Schema`. This crate converts in both directions:
//! - [`schema_to_arrow`] always succeeds.
//! - [`schema_from_arrow`] rejects Arrow types that have no counterpart in
//!   the `colschema-core` model (timestamps, decimals, maps, ...).
//!
//! List elements are named `item` on the Arrow side and are anonymous on the
//! `colschema` side. Other anonymous fields are written with an empty name,
//! and an empty Arrow name reads back as anonymous. Builder-produced schemas
//! survive the round trip as long as they do not use `""` as a field name.
//!
//! # Typical Flow
//! ```rust
//! use colschema_arrow::{schema_from_arrow, schema_to_arrow};
//! use colschema_core::{ElementBuilder, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new()
//!     .utf8_field("id")
//!     .list_field("tags", ElementBuilder::utf8())
//!     .build();
//! let arrow_schema = schema_to_arrow(&schema);
//! assert_eq!(schema_from_arrow(&arrow_schema).ok(), Some(schema));
//! ```
pub mod error;
pub mod schema_convert;

/// Re-export of [`error::ArrowSchemaError`].
pub use error::ArrowSchemaError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{schema_from_arrow, schema_to_arrow};

pub(crate) const LIST_ITEM_NAME: &str = "item";
