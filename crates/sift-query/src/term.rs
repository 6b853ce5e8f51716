//! The ordered set of significant terms derived from a query.

use std::{fmt, slice};

use serde::Serialize;

/// Significant terms extracted from a query, in query order.
///
/// Terms are lowercase and non-empty. Duplicates are kept: a term repeated in the
/// query contributes its weight once per repetition when scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermSet {
    /// Terms in the order they appeared in the query.
    terms: Vec<String>,
}

impl TermSet {
    /// Builds a term set from already-normalized terms.
    ///
    /// Terms are lowercased and empty strings are dropped, so every term in the set
    /// can be used as a substring needle.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Number of terms, counting duplicates.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true when no term survived analysis.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in query order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.terms.iter()
    }

    /// Returns the terms as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Returns true if `term` is one of the terms.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Returns true if any term occurs in `haystack`, which must already be lowercase.
    pub fn any_in(&self, haystack: &str) -> bool {
        self.terms.iter().any(|t| haystack.contains(t.as_str()))
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms.join(" "))
    }
}
