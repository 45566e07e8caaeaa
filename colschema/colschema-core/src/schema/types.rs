use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    slice,
};

use crate::error::SchemaError;

/// Logical column type.
///
/// `Struct` and `List` are the only compound variants; a list always carries
/// exactly one element field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Null,
    Bool,
    Int(IntType),
    FloatingPoint(Precision),
    Utf8,
    Binary,
    Struct(Fields),
    List(Box<Field>),
}

impl FieldType {
    pub fn is_primitive(&self) -> bool {
        !matches!(self, FieldType::Struct(_) | FieldType::List(_))
    }

    /// Child fields: struct members, the single list element, or nothing.
    pub fn children(&self) -> &[Field] {
        match self {
            FieldType::Struct(fields) => fields.as_slice(),
            FieldType::List(element) => slice::from_ref(element.as_ref()),
            _ => &[],
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Null => "null",
            FieldType::Bool => "bool",
            FieldType::Int(int) => match (int.bit_width, int.is_signed) {
                (BitWidth::W8, true) => "int8",
                (BitWidth::W16, true) => "int16",
                (BitWidth::W32, true) => "int32",
                (BitWidth::W64, true) => "int64",
                (BitWidth::W8, false) => "uint8",
                (BitWidth::W16, false) => "uint16",
                (BitWidth::W32, false) => "uint32",
                (BitWidth::W64, false) => "uint64",
            },
            FieldType::FloatingPoint(Precision::Half) => "float16",
            FieldType::FloatingPoint(Precision::Single) => "float32",
            FieldType::FloatingPoint(Precision::Double) => "float64",
            FieldType::Utf8 => "utf8",
            FieldType::Binary => "binary",
            FieldType::Struct(_) => "struct",
            FieldType::List(_) => "list",
        }
    }
}

/// Width of a fixed-width integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitWidth {
    W8,
    W16,
    W32,
    W64,
}

impl BitWidth {
    pub fn bits(self) -> u8 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = SchemaError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitWidth::W8),
            16 => Ok(BitWidth::W16),
            32 => Ok(BitWidth::W32),
            64 => Ok(BitWidth::W64),
            other => Err(SchemaError::UnsupportedBitWidth(other)),
        }
    }
}

/// Fixed-width integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    pub bit_width: BitWidth,
    pub is_signed: bool,
}

impl IntType {
    pub fn new(bit_width: BitWidth, is_signed: bool) -> Self {
        Self {
            bit_width,
            is_signed,
        }
    }
}

/// Floating point precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Half,
    Single,
    Double,
}

impl Precision {
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::Half => "HALF",
            Precision::Single => "SINGLE",
            Precision::Double => "DOUBLE",
        }
    }
}

/// A named (or anonymous), typed slot within a schema or struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: Option<String>,
    nullable: bool,
    data_type: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: FieldType, nullable: bool) -> Self {
        Self {
            name: Some(name.into()),
            nullable,
            data_type,
        }
    }

    /// Field without a name, used for list elements and struct-wrapping elements.
    pub fn anonymous(data_type: FieldType, nullable: bool) -> Self {
        Self {
            name: None,
            nullable,
            data_type,
        }
    }

    pub(crate) fn with_optional_name(
        name: Option<String>,
        data_type: FieldType,
        nullable: bool,
    ) -> Self {
        Self {
            name,
            nullable,
            data_type,
        }
    }

    /// Same field with `nullable` set on it and on every nested child.
    pub(crate) fn into_nullable(self) -> Self {
        let data_type = match self.data_type {
            FieldType::Struct(children) => {
                FieldType::Struct(children.0.into_iter().map(Field::into_nullable).collect())
            }
            FieldType::List(element) => FieldType::List(Box::new(element.into_nullable())),
            primitive => primitive,
        };
        Self {
            name: self.name,
            nullable: true,
            data_type,
        }
    }

    pub(crate) fn into_data_type(self) -> FieldType {
        self.data_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn data_type(&self) -> &FieldType {
        &self.data_type
    }

    pub fn children(&self) -> &[Field] {
        self.data_type.children()
    }

    /// Number of field levels from this field down to its deepest leaf;
    /// a primitive field has depth 1.
    pub fn nesting_depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Field::nesting_depth)
            .max()
            .unwrap_or(0)
    }
}

/// Ordered collection of [`Field`] used for schema bodies and struct members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.0.iter()
    }
}

impl From<Vec<Field>> for Fields {
    fn from(value: Vec<Field>) -> Self {
        Self(value)
    }
}

impl From<Fields> for Vec<Field> {
    fn from(value: Fields) -> Self {
        value.0
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[Field]> for Fields {
    fn as_ref(&self) -> &[Field] {
        self.as_slice()
    }
}

impl Deref for Fields {
    type Target = [Field];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Fields {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = super::format_fields(self.as_slice())?;
        f.write_str(&text)
    }
}

/// Root of a schema tree: an ordered sequence of top-level fields.
///
/// A `Schema` has no mutating API. Field names are not required to be
/// unique; name lookups resolve to the first match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Schema {
    fields: Fields,
}

impl Schema {
    pub fn new(fields: impl Into<Fields>) -> Self {
        Self {
            fields: fields.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Field at `index` in declaration order.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Position of the first field called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == Some(name))
    }

    pub fn field_with_name(&self, name: &str) -> Option<&Field> {
        self.index_of(name).and_then(|i| self.field(i))
    }

    /// Deepest [`Field::nesting_depth`] among the top-level fields.
    pub fn nesting_depth(&self) -> usize {
        self.fields
            .iter()
            .map(Field::nesting_depth)
            .max()
            .unwrap_or(0)
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
