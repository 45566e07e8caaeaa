//! Error types for schema construction and parsing.

/// Error returned when a schema cannot be constructed or parsed.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema text is not valid JSON or does not follow the schema layout.
    #[error("failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema text is well-formed JSON but describes an invalid tree
    /// (e.g., a list without exactly one child).
    #[error("invalid schema at '{path}': {detail}")]
    Parse { path: String, detail: String },

    /// A builder did not have the shape required by the caller
    /// (e.g., a list element built from zero or several fields).
    #[error("invalid schema shape: {detail}")]
    InvalidShape { detail: String },

    /// Schema nests deeper than its JSON form allows.
    #[error("schema nests {depth} levels deep, at most {max} can be serialized")]
    NestingTooDeep { depth: usize, max: usize },

    /// Integer width other than 8, 16, 32 or 64 bits.
    #[error("unsupported integer bit width {0}, expected 8, 16, 32 or 64")]
    UnsupportedBitWidth(u8),
}

impl SchemaError {
    /// Whether the error comes from parsing schema text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SchemaError::Json(_) | SchemaError::Parse { .. })
    }
}
