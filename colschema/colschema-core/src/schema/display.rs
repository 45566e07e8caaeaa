//! Single-line rendering used for diagnostics and test assertions.
//!
//! `Schema<id: Utf8, person: Struct<id: Int(32, false)>, tags: List<Utf8>>`

use std::fmt::{Display, Formatter, Result};

use super::{Field, FieldType, Fields, IntType, Precision, Schema};

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("Schema<")?;
        write_joined(self.fields(), f)?;
        f.write_str(">")
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(name) = self.name() {
            write!(f, "{name}: ")?;
        }
        write!(f, "{}", self.data_type())?;
        if !self.is_nullable() {
            f.write_str(" not null")?;
        }
        Ok(())
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FieldType::Null => f.write_str("Null"),
            FieldType::Bool => f.write_str("Bool"),
            FieldType::Int(int) => write!(f, "{int}"),
            FieldType::FloatingPoint(precision) => write!(f, "FloatingPoint({precision})"),
            FieldType::Utf8 => f.write_str("Utf8"),
            FieldType::Binary => f.write_str("Binary"),
            FieldType::Struct(children) if children.is_empty() => f.write_str("Struct"),
            FieldType::Struct(children) => {
                f.write_str("Struct<")?;
                write_joined(children, f)?;
                f.write_str(">")
            }
            FieldType::List(element) => write!(f, "List<{element}>"),
        }
    }
}

impl Display for IntType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Int({}, {})", self.bit_width.bits(), self.is_signed)
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

fn write_joined(fields: &Fields, f: &mut Formatter<'_>) -> Result {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{field}")?;
    }
    Ok(())
}
