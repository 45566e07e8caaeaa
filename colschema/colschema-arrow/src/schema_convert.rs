use std::sync::Arc;

use arrow::datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema};
use colschema_core::{BitWidth, Field, FieldType, Fields, IntType, Precision, Schema};
use tracing::warn;

use crate::{ArrowSchemaError, LIST_ITEM_NAME};

// ---------------------------------------------------------------------------
// colschema -> Arrow
// ---------------------------------------------------------------------------

/// Converts a `colschema-core` schema into an Arrow `Schema`.
///
/// Anonymous list elements are named `item`; other anonymous fields get an
/// empty name.
pub fn schema_to_arrow(schema: &Schema) -> ArrowSchema {
    let arrow_fields: Vec<ArrowField> = schema.iter().map(|f| field_to_arrow(f, "")).collect();
    ArrowSchema::new(arrow_fields)
}

fn field_to_arrow(field: &Field, anonymous_name: &str) -> ArrowField {
    ArrowField::new(
        field.name().unwrap_or(anonymous_name),
        field_type_to_arrow(field.data_type()),
        field.is_nullable(),
    )
}

fn field_type_to_arrow(data_type: &FieldType) -> DataType {
    match data_type {
        FieldType::Null => DataType::Null,
        FieldType::Bool => DataType::Boolean,
        FieldType::Int(int) => match (int.bit_width, int.is_signed) {
            (BitWidth::W8, true) => DataType::Int8,
            (BitWidth::W16, true) => DataType::Int16,
            (BitWidth::W32, true) => DataType::Int32,
            (BitWidth::W64, true) => DataType::Int64,
            (BitWidth::W8, false) => DataType::UInt8,
            (BitWidth::W16, false) => DataType::UInt16,
            (BitWidth::W32, false) => DataType::UInt32,
            (BitWidth::W64, false) => DataType::UInt64,
        },
        FieldType::FloatingPoint(Precision::Half) => DataType::Float16,
        FieldType::FloatingPoint(Precision::Single) => DataType::Float32,
        FieldType::FloatingPoint(Precision::Double) => DataType::Float64,
        FieldType::Utf8 => DataType::Utf8,
        FieldType::Binary => DataType::Binary,
        FieldType::Struct(children) => {
            let arrow_fields: Vec<ArrowField> =
                children.iter().map(|f| field_to_arrow(f, "")).collect();
            DataType::Struct(arrow_fields.into())
        }
        FieldType::List(element) => {
            DataType::List(Arc::new(field_to_arrow(element, LIST_ITEM_NAME)))
        }
    }
}

// ---------------------------------------------------------------------------
// Arrow -> colschema
// ---------------------------------------------------------------------------

/// Converts an Arrow `Schema` into a `colschema-core` schema.
///
/// Large and view variants of string, binary and list types are narrowed to
/// their plain counterparts. List element names are dropped and fields with
/// an empty name become anonymous, mirroring [`schema_to_arrow`].
pub fn schema_from_arrow(schema: &ArrowSchema) -> Result<Schema, ArrowSchemaError> {
    let fields = schema
        .fields()
        .iter()
        .map(|f| field_from_arrow(f, false))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Schema::new(fields))
}

fn field_from_arrow(field: &ArrowField, is_element: bool) -> Result<Field, ArrowSchemaError> {
    let data_type = field_type_from_arrow(field)?;
    Ok(if is_element || field.name().is_empty() {
        Field::anonymous(data_type, field.is_nullable())
    } else {
        Field::new(field.name(), data_type, field.is_nullable())
    })
}

fn field_type_from_arrow(field: &ArrowField) -> Result<FieldType, ArrowSchemaError> {
    let data_type = match field.data_type() {
        DataType::Null => FieldType::Null,
        DataType::Boolean => FieldType::Bool,
        DataType::Int8 => int(BitWidth::W8, true),
        DataType::Int16 => int(BitWidth::W16, true),
        DataType::Int32 => int(BitWidth::W32, true),
        DataType::Int64 => int(BitWidth::W64, true),
        DataType::UInt8 => int(BitWidth::W8, false),
        DataType::UInt16 => int(BitWidth::W16, false),
        DataType::UInt32 => int(BitWidth::W32, false),
        DataType::UInt64 => int(BitWidth::W64, false),
        DataType::Float16 => FieldType::FloatingPoint(Precision::Half),
        DataType::Float32 => FieldType::FloatingPoint(Precision::Single),
        DataType::Float64 => FieldType::FloatingPoint(Precision::Double),
        DataType::Utf8 => FieldType::Utf8,
        DataType::LargeUtf8 | DataType::Utf8View => {
            narrowed(field);
            FieldType::Utf8
        }
        DataType::Binary => FieldType::Binary,
        DataType::LargeBinary | DataType::BinaryView => {
            narrowed(field);
            FieldType::Binary
        }
        DataType::Struct(children) => {
            let fields = children
                .iter()
                .map(|f| field_from_arrow(f, false))
                .collect::<Result<Fields, _>>()?;
            FieldType::Struct(fields)
        }
        DataType::List(element) => FieldType::List(Box::new(field_from_arrow(element, true)?)),
        DataType::LargeList(element) | DataType::ListView(element) => {
            narrowed(field);
            FieldType::List(Box::new(field_from_arrow(element, true)?))
        }
        other => {
            return Err(ArrowSchemaError::UnsupportedType {
                field: field.name().clone(),
                data_type: other.clone(),
            });
        }
    };
    Ok(data_type)
}

fn int(bit_width: BitWidth, is_signed: bool) -> FieldType {
    FieldType::Int(IntType::new(bit_width, is_signed))
}

fn narrowed(field: &ArrowField) {
    warn!(
        field = field.name().as_str(),
        data_type = %field.data_type(),
        "narrowing Arrow type to its plain counterpart"
    );
}
