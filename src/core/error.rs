use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistSqlError {
    #[error("Unsupported statement kind '{0}': no executor registered")]
    UnsupportedStatementKind(String),
    #[error("Metadata inconsistency: unknown {category} kind '{kind}'")]
    MetadataInconsistency { category: String, kind: String },
    #[error("Duplicate {category} rule: only one is allowed per scope")]
    DuplicateRule { category: String },
    #[error("Property serialization failed: {0}")]
    SerializationFailure(String),
    #[error("Database '{0}' not found")]
    DatabaseNotFound(String),
    #[error("No database selected")]
    NoDatabaseSelected,
    #[error("Row has {actual} cells, expected {expected}")]
    RowArityMismatch { expected: usize, actual: usize },
    #[error("Invalid execution state: {0}")]
    InvalidExecutionState(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for DistSqlError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationFailure(err.to_string())
    }
}
