use arrow::datatypes::DataType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowSchemaError {
    #[error("field '{field}' has Arrow type {data_type} with no schema counterpart")]
    UnsupportedType { field: String, data_type: DataType },
}
