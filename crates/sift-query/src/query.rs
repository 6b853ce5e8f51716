//! Validated queries ready for scoring.

use serde::Serialize;

use crate::{QueryAnalyzer, QueryError, TermSet};

/// A query that has been analyzed and is known to contain at least one term.
///
/// Scorers take a `Query` rather than a raw string, so an empty term set can never
/// reach a normalization divisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// The query exactly as supplied.
    raw: String,
    /// Significant terms, never empty.
    terms: TermSet,
}

impl Query {
    /// Analyzes `raw` and validates that it produced at least one term.
    pub fn parse(raw: &str, analyzer: &QueryAnalyzer) -> Result<Self, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::Blank);
        }
        let terms = analyzer.analyze(raw);
        if terms.is_empty() {
            return Err(QueryError::NoSignificantTerms {
                query: raw.to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            terms,
        })
    }

    /// The query as supplied by the caller.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The trimmed, lowercased query used for verbatim phrase checks.
    pub fn phrase(&self) -> String {
        self.raw.trim().to_lowercase()
    }

    /// The significant terms.
    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    /// Number of terms, counting duplicates. Always at least one.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
