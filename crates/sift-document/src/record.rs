//! Structured repository metadata records.

use serde::{Deserialize, Serialize};

use crate::RecordError;

/// Repository metadata scored against a query.
///
/// Field names follow the GitHub REST API where it differs (`full_name`,
/// `stargazers_count`, `forks_count`), so API responses deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// Unique identifier, typically `owner/name`.
    #[serde(alias = "full_name")]
    pub id: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Topic tags. Duplicates are removed when the record is built.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Star count.
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
    /// Fork count.
    #[serde(default, alias = "forks_count")]
    pub forks: u64,
}

impl Record {
    /// Creates a record with no description, topics, or popularity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            topics: Vec::new(),
            stars: 0,
            forks: 0,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the topics, dropping duplicates while preserving order.
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self.dedup_topics();
        self
    }

    /// Sets the star and fork counts.
    pub fn with_popularity(mut self, stars: u64, forks: u64) -> Self {
        self.stars = stars;
        self.forks = forks;
        self
    }

    /// Removes duplicate topics, keeping the first occurrence.
    pub fn dedup_topics(&mut self) {
        let mut seen = Vec::with_capacity(self.topics.len());
        self.topics.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(t.clone());
                true
            }
        });
    }

    /// Checks that the record can be scored.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingId);
        }
        if self.topics.iter().any(|t| t.trim().is_empty()) {
            return Err(RecordError::EmptyTopic {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}
