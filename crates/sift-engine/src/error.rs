//! Per-item failures collected during a search.

use serde::Serialize;
use sift_document::{DocumentError, RecordError};
use thiserror::Error;

/// Reason a single document or record was skipped.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The document failed validation.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The record failed validation.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// A document or record that was skipped while the rest of the batch was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    /// Document path or record id, possibly empty when that is the problem.
    pub source: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ItemFailure {
    /// Builds a failure entry for an item.
    pub fn new(source: impl Into<String>, error: &ItemError) -> Self {
        Self {
            source: source.into(),
            reason: error.to_string(),
        }
    }
}
