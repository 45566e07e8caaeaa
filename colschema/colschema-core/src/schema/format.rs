//! Indented multi-line rendering of field trees.

use std::fmt::{Error, Result, Write as _};

use super::{Field, FieldType};

const ANONYMOUS_LABEL: &str = "item";

/// Format fields in a readable block style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Nested fields follow the same rule. Anonymous fields are labelled `item`.
pub fn format_fields(fields: impl AsRef<[Field]>) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &Field, indent: usize, out: &mut String) -> Result {
    let label = field.name().unwrap_or(ANONYMOUS_LABEL);
    let pad = " ".repeat(indent);
    let data_type = field.data_type();

    if data_type.is_primitive() {
        writeln!(
            out,
            "{pad}{label}: {{ type: {}, nullable: {} }}",
            data_type.type_name(),
            field.is_nullable()
        )?;
        return Ok(());
    }

    writeln!(out, "{pad}{label}:")?;
    let pad = " ".repeat(indent + 4);
    writeln!(out, "{pad}type: {}", data_type.type_name())?;
    writeln!(out, "{pad}nullable: {}", field.is_nullable())?;

    match data_type {
        FieldType::Struct(children) => {
            writeln!(out, "{pad}fields:")?;
            for child in children.iter() {
                format_field(child, indent + 8, out)?;
            }
        }
        FieldType::List(element) => format_field(element, indent + 4, out)?,
        _ => unreachable!("{data_type:?} is not a compound type"),
    }

    Ok(())
}
