use crate::field::FieldName;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field declared more than once: {0}")]
    DuplicateField(FieldName),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Invalid pattern for {field}: {pattern} ({reason})")]
    InvalidPattern {
        field: FieldName,
        pattern: String,
        reason: String,
    },
}
