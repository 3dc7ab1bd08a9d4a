//! Error types for the term codec and search providers.

use thiserror::Error;

/// Codec and provider errors
///
/// Every variant is fatal for the evaluation that raised it.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required field is absent from a retrieved document.
    #[error("required index field '{field}' is missing from document")]
    SchemaFieldMissing { field: String },

    /// The node-type field holds a value that is not a known node kind.
    #[error("index field '{field}' holds invalid node type '{value}'")]
    SchemaValueInvalid { field: String, value: String },

    /// The node kind cannot be stored in or retrieved from a search index.
    #[error("unsupported term kind for full-text indexing: {kind}")]
    UnsupportedTermKind { kind: String },

    /// Invalid index schema configuration.
    #[error("invalid index schema: {0}")]
    Schema(String),

    /// Failure raised by the search backend; passed through untouched.
    #[error("search backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SearchError {
    pub fn field_missing(field: impl Into<String>) -> Self {
        SearchError::SchemaFieldMissing {
            field: field.into(),
        }
    }

    /// Wrap a backend failure.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SearchError::Backend(err.into())
    }
}

/// Result type for codec and provider operations
pub type Result<T> = std::result::Result<T, SearchError>;
