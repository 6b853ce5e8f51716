//! Result types returned by the search entry points.

use serde::Serialize;
use sift_query::{Query, QueryError, TermSet};

use crate::{ItemFailure, RankedResult, grouping::Snippet, window::WindowExcerpt};

/// One excerpt from a text document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TextHit {
    /// The document's best fixed-size window.
    Window(WindowExcerpt),
    /// One cluster of nearby matches with context.
    Snippet(Snippet),
}

impl TextHit {
    /// Document path.
    pub fn path(&self) -> &str {
        match self {
            Self::Window(w) => &w.path,
            Self::Snippet(s) => &s.path,
        }
    }

    /// One-indexed inclusive line range.
    pub fn line_range(&self) -> (usize, usize) {
        match self {
            Self::Window(w) => (w.line_start, w.line_end),
            Self::Snippet(s) => (s.line_start, s.line_end),
        }
    }

    /// Excerpt text in its original case.
    pub fn text(&self) -> &str {
        match self {
            Self::Window(w) => &w.text,
            Self::Snippet(s) => &s.text,
        }
    }

    /// Normalized score.
    pub fn score(&self) -> f64 {
        match self {
            Self::Window(w) => w.score,
            Self::Snippet(s) => s.score,
        }
    }

    /// One-indexed lines known to contain a query term.
    ///
    /// Windows do not track individual lines, so this is empty for them.
    pub fn matched_lines(&self) -> &[usize] {
        match self {
            Self::Window(_) => &[],
            Self::Snippet(s) => &s.matched_lines,
        }
    }

    /// Identity for deduplication: path plus line range.
    pub fn identity(&self) -> (String, usize, usize) {
        let (start, end) = self.line_range();
        (self.path().to_string(), start, end)
    }
}

/// Results of one search call.
#[derive(Debug, Clone)]
pub struct SearchOutcome<T> {
    /// The analyzed query, or `None` when it had no significant terms.
    pub query: Option<Query>,
    /// Why the query was rejected, if it was.
    pub query_error: Option<QueryError>,
    /// Ranked results, score descending, truncated to the limit.
    pub results: Vec<RankedResult<T>>,
    /// Items that were skipped.
    pub failures: Vec<ItemFailure>,
}

impl<T> SearchOutcome<T> {
    /// An outcome for a query that cannot match anything.
    pub(crate) fn rejected(error: QueryError) -> Self {
        Self {
            query: None,
            query_error: Some(error),
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Terms the query was analyzed into; empty for a rejected query.
    pub fn terms(&self) -> TermSet {
        self.query
            .as_ref()
            .map(|q| q.terms().clone())
            .unwrap_or_default()
    }

    /// Returns true if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
