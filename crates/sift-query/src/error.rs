//! Error types for query analysis.

use thiserror::Error;

/// Errors produced when a raw query cannot be used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query is empty or whitespace only.
    #[error("query is empty")]
    Blank,

    /// Every token was too short or a stopword.
    #[error("query '{query}' has no significant terms")]
    NoSignificantTerms {
        /// The query as supplied by the caller.
        query: String,
    },
}
