//! Fluent construction of [`Schema`] values.
//!
//! ```rust
//! use colschema_core::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .utf8_field("id")
//!     .struct_field(
//!         "person",
//!         SchemaBuilder::new()
//!             .int32_unsigned_field("id")
//!             .utf8_field("name"),
//!     )
//!     .list_field(
//!         "addresses",
//!         SchemaBuilder::struct_builder(
//!             SchemaBuilder::new()
//!                 .utf8_field("city")
//!                 .utf8_field("zipcode"),
//!         ),
//!     )
//!     .build();
//!
//! assert_eq!(
//!     schema.to_string(),
//!     "Schema<id: Utf8, person: Struct<id: Int(32, false), name: Utf8>, \
//!      addresses: List<Struct<city: Utf8, zipcode: Utf8>>>"
//! );
//! ```

use tracing::debug;

use crate::{
    error::SchemaError,
    schema::{BitWidth, Field, FieldType, Fields, IntType, Precision, Schema},
};

/// Accumulates top-level (or struct member) fields in declaration order.
///
/// Every field appended through the builder is nullable. Nested builders
/// passed to [`struct_field`](Self::struct_field) and
/// [`list_field`](Self::list_field) are consumed; their fields are captured
/// by value.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `builder`'s fields into a single anonymous struct field, for use
    /// as a list element template.
    pub fn struct_builder(builder: SchemaBuilder) -> ElementBuilder {
        ElementBuilder::struct_of(builder)
    }

    /// Appends a prebuilt field. The field and all of its nested children
    /// are made nullable.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field.into_nullable());
        self
    }

    #[must_use]
    pub fn null_field(self, name: impl Into<String>) -> Self {
        self.nullable(name, FieldType::Null)
    }

    #[must_use]
    pub fn boolean_field(self, name: impl Into<String>) -> Self {
        self.nullable(name, FieldType::Bool)
    }

    #[must_use]
    pub fn int_field(self, name: impl Into<String>, bit_width: BitWidth, is_signed: bool) -> Self {
        self.nullable(name, FieldType::Int(IntType::new(bit_width, is_signed)))
    }

    #[must_use]
    pub fn int32_signed_field(self, name: impl Into<String>) -> Self {
        self.int_field(name, BitWidth::W32, true)
    }

    #[must_use]
    pub fn int32_unsigned_field(self, name: impl Into<String>) -> Self {
        self.int_field(name, BitWidth::W32, false)
    }

    #[must_use]
    pub fn int64_signed_field(self, name: impl Into<String>) -> Self {
        self.int_field(name, BitWidth::W64, true)
    }

    #[must_use]
    pub fn int64_unsigned_field(self, name: impl Into<String>) -> Self {
        self.int_field(name, BitWidth::W64, false)
    }

    #[must_use]
    pub fn floating_point_field(self, name: impl Into<String>, precision: Precision) -> Self {
        self.nullable(name, FieldType::FloatingPoint(precision))
    }

    #[must_use]
    pub fn floating_point_single_precision_field(self, name: impl Into<String>) -> Self {
        self.floating_point_field(name, Precision::Single)
    }

    #[must_use]
    pub fn floating_point_double_precision_field(self, name: impl Into<String>) -> Self {
        self.floating_point_field(name, Precision::Double)
    }

    #[must_use]
    pub fn utf8_field(self, name: impl Into<String>) -> Self {
        self.nullable(name, FieldType::Utf8)
    }

    #[must_use]
    pub fn binary_field(self, name: impl Into<String>) -> Self {
        self.nullable(name, FieldType::Binary)
    }

    /// Appends a struct field whose members are `members`' fields.
    #[must_use]
    pub fn struct_field(self, name: impl Into<String>, members: SchemaBuilder) -> Self {
        self.nullable(name, FieldType::Struct(members.fields.into()))
    }

    /// Appends a list field whose elements are shaped by `element`.
    #[must_use]
    pub fn list_field(self, name: impl Into<String>, element: ElementBuilder) -> Self {
        self.nullable(name, FieldType::List(Box::new(element.field)))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Snapshots the accumulated fields into an immutable [`Schema`].
    ///
    /// The accumulator is left untouched, so repeated calls return equal
    /// schemas.
    pub fn build(&self) -> Schema {
        debug!(fields = self.fields.len(), "built schema");
        Schema::new(self.fields.clone())
    }

    /// Consuming variant of [`build`](Self::build).
    pub fn into_schema(self) -> Schema {
        debug!(fields = self.fields.len(), "built schema");
        Schema::new(self.fields)
    }

    fn nullable(mut self, name: impl Into<String>, data_type: FieldType) -> Self {
        self.fields.push(Field::new(name, data_type, true));
        self
    }
}

impl From<SchemaBuilder> for Fields {
    fn from(builder: SchemaBuilder) -> Self {
        builder.fields.into()
    }
}

/// Builder holding exactly one anonymous, nullable field: the element
/// template of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBuilder {
    field: Field,
}

impl ElementBuilder {
    fn of(data_type: FieldType) -> Self {
        Self {
            field: Field::anonymous(data_type, true),
        }
    }

    pub fn null() -> Self {
        Self::of(FieldType::Null)
    }

    pub fn boolean() -> Self {
        Self::of(FieldType::Bool)
    }

    pub fn int(bit_width: BitWidth, is_signed: bool) -> Self {
        Self::of(FieldType::Int(IntType::new(bit_width, is_signed)))
    }

    pub fn int32_signed() -> Self {
        Self::int(BitWidth::W32, true)
    }

    pub fn int32_unsigned() -> Self {
        Self::int(BitWidth::W32, false)
    }

    pub fn int64_signed() -> Self {
        Self::int(BitWidth::W64, true)
    }

    pub fn int64_unsigned() -> Self {
        Self::int(BitWidth::W64, false)
    }

    pub fn floating_point(precision: Precision) -> Self {
        Self::of(FieldType::FloatingPoint(precision))
    }

    pub fn utf8() -> Self {
        Self::of(FieldType::Utf8)
    }

    pub fn binary() -> Self {
        Self::of(FieldType::Binary)
    }

    /// Anonymous struct whose members are `members`' fields.
    pub fn struct_of(members: SchemaBuilder) -> Self {
        Self::of(FieldType::Struct(members.fields.into()))
    }

    /// Anonymous list of lists.
    pub fn list_of(element: ElementBuilder) -> Self {
        Self::of(FieldType::List(Box::new(element.field)))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// One-field schema holding the element.
    pub fn build(&self) -> Schema {
        Schema::new(vec![self.field.clone()])
    }
}

impl TryFrom<SchemaBuilder> for ElementBuilder {
    type Error = SchemaError;

    /// Takes the builder's only field as the element, dropping its name and
    /// making it nullable. Fails if the builder holds zero or several fields.
    fn try_from(builder: SchemaBuilder) -> Result<Self, Self::Error> {
        let [field]: [Field; 1] =
            builder
                .fields
                .try_into()
                .map_err(|fields: Vec<Field>| SchemaError::InvalidShape {
                    detail: format!(
                        "list element requires exactly one field, found {}",
                        fields.len()
                    ),
                })?;
        Ok(Self::of(field.into_nullable().into_data_type()))
    }
}
