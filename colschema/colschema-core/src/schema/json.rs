//! Canonical JSON form of a [`Schema`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BitWidth, Field, FieldType, Fields, IntType, Precision, Schema};
use crate::error::SchemaError;

const ROOT_PATH: &str = "$";

/// Deepest field nesting accepted by [`Schema::to_json`] and
/// [`Schema::from_json`], counted as in [`Field::nesting_depth`].
pub const MAX_NESTING_DEPTH: usize = 48;

#[derive(Serialize, Deserialize)]
struct SchemaDoc {
    fields: Vec<FieldDoc>,
}

#[derive(Serialize, Deserialize)]
struct FieldDoc {
    #[serde(default)]
    name: Option<String>,
    nullable: bool,
    #[serde(rename = "type")]
    data_type: TypeDoc,
    #[serde(default)]
    children: Vec<FieldDoc>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
enum TypeDoc {
    Null,
    Bool,
    Int {
        #[serde(rename = "bitWidth")]
        bit_width: u8,
        #[serde(rename = "isSigned")]
        is_signed: bool,
    },
    FloatingPoint {
        precision: PrecisionDoc,
    },
    Utf8,
    Binary,
    Struct,
    List,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum PrecisionDoc {
    Half,
    Single,
    Double,
}

impl Schema {
    /// Serializes the schema to compact JSON.
    ///
    /// Fails with [`SchemaError::NestingTooDeep`] if the schema nests deeper
    /// than [`MAX_NESTING_DEPTH`].
    pub fn to_json(&self) -> Result<String, SchemaError> {
        self.check_nesting_depth()?;
        let text = serde_json::to_string(&SchemaDoc::from(self))?;
        debug!(fields = self.len(), bytes = text.len(), "serialized schema to JSON");
        Ok(text)
    }

    /// Serializes the schema to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        self.check_nesting_depth()?;
        let text = serde_json::to_string_pretty(&SchemaDoc::from(self))?;
        debug!(fields = self.len(), bytes = text.len(), "serialized schema to JSON");
        Ok(text)
    }

    /// Parses a schema from its JSON form.
    ///
    /// Either the whole tree is valid or an error is returned; no partially
    /// populated schema is ever produced.
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        let doc: SchemaDoc = serde_json::from_str(text)?;
        let fields = fields_from_docs(doc.fields, ROOT_PATH, 1)?;
        let schema = Schema::new(fields);
        debug!(fields = schema.len(), "parsed schema from JSON");
        Ok(schema)
    }

    fn check_nesting_depth(&self) -> Result<(), SchemaError> {
        let depth = self.nesting_depth();
        if depth > MAX_NESTING_DEPTH {
            return Err(SchemaError::NestingTooDeep {
                depth,
                max: MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Schema::from_json(s)
    }
}

// ---------------------------------------------------------------------------
// Schema -> document
// ---------------------------------------------------------------------------

impl From<&Schema> for SchemaDoc {
    fn from(schema: &Schema) -> Self {
        Self {
            fields: schema.iter().map(FieldDoc::from).collect(),
        }
    }
}

impl From<&Field> for FieldDoc {
    fn from(field: &Field) -> Self {
        let data_type = match field.data_type() {
            FieldType::Null => TypeDoc::Null,
            FieldType::Bool => TypeDoc::Bool,
            FieldType::Int(int) => TypeDoc::Int {
                bit_width: int.bit_width.bits(),
                is_signed: int.is_signed,
            },
            FieldType::FloatingPoint(precision) => TypeDoc::FloatingPoint {
                precision: match precision {
                    Precision::Half => PrecisionDoc::Half,
                    Precision::Single => PrecisionDoc::Single,
                    Precision::Double => PrecisionDoc::Double,
                },
            },
            FieldType::Utf8 => TypeDoc::Utf8,
            FieldType::Binary => TypeDoc::Binary,
            FieldType::Struct(_) => TypeDoc::Struct,
            FieldType::List(_) => TypeDoc::List,
        };

        Self {
            name: field.name().map(str::to_owned),
            nullable: field.is_nullable(),
            data_type,
            children: field.children().iter().map(FieldDoc::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Document -> Schema
// ---------------------------------------------------------------------------

fn fields_from_docs(
    docs: Vec<FieldDoc>,
    parent: &str,
    depth: usize,
) -> Result<Fields, SchemaError> {
    docs.into_iter()
        .enumerate()
        .map(|(index, doc)| field_from_doc(doc, parent, index, depth))
        .collect::<Result<Vec<_>, _>>()
        .map(Fields::from)
}

fn field_from_doc(
    doc: FieldDoc,
    parent: &str,
    index: usize,
    depth: usize,
) -> Result<Field, SchemaError> {
    let path = match &doc.name {
        Some(name) => format!("{parent}.{name}"),
        None => format!("{parent}.[{index}]"),
    };

    if depth > MAX_NESTING_DEPTH {
        return Err(parse_error(
            &path,
            format!("fields nest deeper than {MAX_NESTING_DEPTH} levels"),
        ));
    }

    let compound = matches!(doc.data_type, TypeDoc::Struct | TypeDoc::List);
    if !compound && !doc.children.is_empty() {
        return Err(parse_error(
            &path,
            format!(
                "primitive type must not have children, found {}",
                doc.children.len()
            ),
        ));
    }

    let data_type = match doc.data_type {
        TypeDoc::Null => FieldType::Null,
        TypeDoc::Bool => FieldType::Bool,
        TypeDoc::Int {
            bit_width,
            is_signed,
        } => {
            let bit_width =
                BitWidth::try_from(bit_width).map_err(|err| parse_error(&path, err.to_string()))?;
            FieldType::Int(IntType::new(bit_width, is_signed))
        }
        TypeDoc::FloatingPoint { precision } => FieldType::FloatingPoint(match precision {
            PrecisionDoc::Half => Precision::Half,
            PrecisionDoc::Single => Precision::Single,
            PrecisionDoc::Double => Precision::Double,
        }),
        TypeDoc::Utf8 => FieldType::Utf8,
        TypeDoc::Binary => FieldType::Binary,
        TypeDoc::Struct => FieldType::Struct(fields_from_docs(doc.children, &path, depth + 1)?),
        TypeDoc::List => {
            let [element]: [FieldDoc; 1] = doc.children.try_into().map_err(|children: Vec<_>| {
                parse_error(
                    &path,
                    format!("list must have exactly one child, found {}", children.len()),
                )
            })?;
            FieldType::List(Box::new(field_from_doc(element, &path, 0, depth + 1)?))
        }
    };

    Ok(Field::with_optional_name(doc.name, data_type, doc.nullable))
}

fn parse_error(path: &str, detail: String) -> SchemaError {
    SchemaError::Parse {
        path: path.to_string(),
        detail,
    }
}
