//! Scoring repository metadata records.
//!
//! A record's score adds up textual overlap with its description and topics and a
//! logarithmic popularity prior. The prior is always applied, so a popular record
//! with no overlap still scores above zero; use [`ScoredRecord::has_text_match`] to
//! filter those out.

use serde::Serialize;
use sift_document::Record;
use sift_query::Query;

use crate::params::RecordWeights;

/// Separator between justification reasons.
const REASON_SEPARATOR: &str = ". ";

/// A record with its score and the reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    /// The scored record.
    pub record: Record,
    /// Raw additive score. Not normalized.
    pub score: f64,
    /// Human-readable explanation of the score.
    pub justification: String,
    /// Query terms found in the description, without repeats.
    pub description_terms: Vec<String>,
    /// Whether the description contains the whole query.
    pub verbatim: bool,
    /// Topics that contain at least one query term.
    pub matched_topics: Vec<String>,
}

impl ScoredRecord {
    /// Record identifier.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Returns true if the description or topics share anything with the query.
    pub fn has_text_match(&self) -> bool {
        self.verbatim || !self.description_terms.is_empty() || !self.matched_topics.is_empty()
    }
}

/// Scores a record against a query.
pub fn match_record(record: &Record, query: &Query, weights: &RecordWeights) -> ScoredRecord {
    let mut score = 0.0;
    let mut description_terms: Vec<String> = Vec::new();
    let mut verbatim = false;

    if let Some(description) = &record.description {
        let description = description.to_lowercase();
        for term in query.terms() {
            if description.contains(term.as_str()) {
                score += weights.description;
                if !description_terms.contains(term) {
                    description_terms.push(term.clone());
                }
            }
        }
        if description.contains(&query.phrase()) {
            score += weights.verbatim;
            verbatim = true;
        }
    }

    let topics: Vec<String> = record.topics.iter().map(|t| t.to_lowercase()).collect();
    if !topics.is_empty() {
        for term in query.terms() {
            if topics.iter().any(|t| t.contains(term.as_str())) {
                score += weights.topic;
            }
        }
    }
    let matched_topics: Vec<String> = record
        .topics
        .iter()
        .zip(&topics)
        .filter(|(_, lowered)| query.terms().any_in(lowered))
        .map(|(original, _)| original.clone())
        .collect();

    score += weights.stars * popularity(record.stars) + weights.forks * popularity(record.forks);

    let justification = justify(record, &description_terms, verbatim, &matched_topics);
    ScoredRecord {
        record: record.clone(),
        score: score.max(0.0),
        justification,
        description_terms,
        verbatim,
        matched_topics,
    }
}

/// `log10(count + 1)`, zero for a zero count.
fn popularity(count: u64) -> f64 {
    (count as f64 + 1.0).log10()
}

/// Builds the justification string from the matched parts of a record.
fn justify(
    record: &Record,
    description_terms: &[String],
    verbatim: bool,
    matched_topics: &[String],
) -> String {
    let mut reasons = Vec::with_capacity(4);
    if !description_terms.is_empty() {
        reasons.push(format!(
            "description contains key terms: {}",
            description_terms.join(", ")
        ));
    }
    if verbatim {
        reasons.push("description closely matches the functionality description".to_string());
    }
    if !matched_topics.is_empty() {
        reasons.push(format!(
            "has relevant topics: {}",
            matched_topics.join(", ")
        ));
    }
    reasons.push(format!(
        "has {} stars and {} forks",
        record.stars, record.forks
    ));
    reasons.join(REASON_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use sift_query::QueryAnalyzer;

    use super::*;

    fn query(raw: &str) -> Query {
        Query::parse(raw, &QueryAnalyzer::default()).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn description_and_topics() {
        let record = Record::new("acme/jsonkit")
            .with_description("Fast parser for JSON in Rust")
            .with_topics(["json", "parsing", "serde"]);
        let scored = match_record(&record, &query("json parser"), &RecordWeights::default());

        // Both terms in the description; only "json" is inside a topic.
        assert!(approx(scored.score, 2.0 * 2.0 + 3.0));
        assert_eq!(scored.description_terms, ["json", "parser"]);
        assert_eq!(scored.matched_topics, ["json"]);
        assert!(!scored.verbatim);
        assert!(scored.has_text_match());
    }

    #[test]
    fn verbatim_bonus_is_at_least_ten() {
        let with_phrase = Record::new("a/one").with_description("a json parser library");
        let without = Record::new("a/two").with_description("a parser library for json");
        let q = query("json parser");
        let weights = RecordWeights::default();

        let a = match_record(&with_phrase, &q, &weights);
        let b = match_record(&without, &q, &weights);
        assert!(a.verbatim);
        assert!(!b.verbatim);
        assert!(a.score - b.score >= 10.0 - 1e-9);
    }

    #[test]
    fn popularity_applies_without_text_match() {
        let record = Record::new("big/project")
            .with_description("unrelated")
            .with_popularity(999, 99);
        let scored = match_record(&record, &query("compiler"), &RecordWeights::default());

        assert!(approx(scored.score, 0.5 * 3.0 + 0.3 * 2.0));
        assert!(!scored.has_text_match());
        assert_eq!(scored.justification, "has 999 stars and 99 forks");
    }

    #[test]
    fn zero_popularity_scores_zero() {
        let scored = match_record(&Record::new("a/b"), &query("compiler"), &RecordWeights::default());
        assert!(approx(scored.score, 0.0));
    }

    #[test]
    fn duplicate_terms_weigh_twice_but_list_once() {
        let record = Record::new("a/b").with_description("cache layer");
        let scored = match_record(&record, &query("cache cache"), &RecordWeights::default());
        // Two description hits; the whole phrase "cache cache" is not present.
        assert!(approx(scored.score, 4.0));
        assert_eq!(scored.description_terms, ["cache"]);
    }

    #[test]
    fn justification_order() {
        let record = Record::new("a/b")
            .with_description("HTTP client for Rust")
            .with_topics(["http", "networking"])
            .with_popularity(10, 2);
        let scored = match_record(&record, &query("http client"), &RecordWeights::default());
        assert_eq!(
            scored.justification,
            "description contains key terms: http, client. \
             description closely matches the functionality description. \
             has relevant topics: http. \
             has 10 stars and 2 forks"
        );
    }

    #[test]
    fn topic_match_is_case_insensitive() {
        let record = Record::new("a/b").with_topics(["WebAssembly"]);
        let scored = match_record(&record, &query("webassembly"), &RecordWeights::default());
        assert!(approx(scored.score, 3.0));
        assert_eq!(scored.matched_topics, ["WebAssembly"]);
    }
}
