//! Schema definition model for nested columnar data.
//!
//! This crate provides an immutable schema tree ([`Schema`] / [`Field`] /
//! [`FieldType`]), a fluent [`SchemaBuilder`], and a canonical JSON form
//! ([`Schema::to_json`] / [`Schema::from_json`]).
//!
//! # JSON form
//!
//! The layout follows the Arrow JSON schema representation:
//!
//! ```json
//! {
//!   "fields": [
//!     {
//!       "name": "person",
//!       "nullable": true,
//!       "type": { "name": "struct" },
//!       "children": [
//!         {
//!           "name": "id",
//!           "nullable": true,
//!           "type": { "name": "int", "bitWidth": 32, "isSigned": false },
//!           "children": []
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Type objects are tagged by `name`: `null`, `bool`, `int` (`bitWidth`,
//! `isSigned`), `floatingpoint` (`precision`: `HALF`, `SINGLE` or `DOUBLE`),
//! `utf8`, `binary`, `struct` and `list`. A field `name` of `null` (or a
//! missing `name`) is an anonymous field; a missing `children` array is
//! treated as empty. A `list` must carry exactly one child and primitive types
//! must carry none. Fields may nest at most [`MAX_NESTING_DEPTH`] levels
//! deep; deeper schemas are rejected in both directions.

mod builder;
mod error;
mod schema;

pub use builder::{ElementBuilder, SchemaBuilder};
pub use error::SchemaError;
pub use schema::{
    BitWidth, Field, FieldType, Fields, IntType, MAX_NESTING_DEPTH, Precision, Schema,
    format_fields,
};
