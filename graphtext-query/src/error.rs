//! Error types for compiling and evaluating search functions

use graphtext_search_protocol::SearchError;
use thiserror::Error;

/// Query compilation and evaluation errors
///
/// None of these are recoverable within a query: each aborts the enclosing
/// evaluation.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Error from the codec or the search backend (passed through unchanged)
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Search text argument is a fixed term but not a literal
    #[error("search text must be a literal, found {0}")]
    NonLiteralSearchTerm(String),

    /// Search text argument is a variable
    #[error("search text must be a constant literal, found variable ?{0}")]
    NonConstantSearchTerm(String),

    /// Limit or threshold argument is not a numeric constant
    #[error("{role} argument must be a numeric constant, found {found}")]
    NonNumericConstant { role: &'static str, found: String },

    /// Score slot holds a constant instead of a variable
    #[error("score argument must be a variable, found {0}")]
    FixedScoreVariable(String),

    /// Score variable already bound by the input solutions
    #[error("score variable ?{0} is already bound by earlier patterns")]
    ScoreVariableConflict(String),

    /// No search provider registered under the context key
    #[error("no full-text search provider registered under '{0}'")]
    ProviderUnavailable(String),

    /// Function IRI is not a registered property function
    #[error("unknown property function <{0}>")]
    UnknownFunction(String),

    /// Wrong number of subject or object arguments
    #[error("{function} expects {expected} {side} argument(s), found {found}")]
    InvalidArgumentCount {
        function: &'static str,
        side: &'static str,
        expected: &'static str,
        found: usize,
    },
}

/// Result type for query operations
pub type Result<T> = std::result::Result<T, QueryError>;
