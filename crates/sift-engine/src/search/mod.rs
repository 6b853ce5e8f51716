//! Search entry points.
//!
//! A search runs in three steps:
//!
//! 1. **Analyze**: the raw query is parsed once into a [`Query`]. A query with no
//!    significant terms short-circuits to an empty outcome.
//! 2. **Score**: every document or record is validated and scored independently,
//!    on the rayon pool when `parallel` is set. Invalid items are recorded as
//!    failures and the rest of the batch continues.
//! 3. **Aggregate**: per-item results are merged with a stable descending sort and
//!    truncated to the limit.

mod types;


use rayon::prelude::*;
use sift_config::{Config, TextMode};
use sift_document::{Document, Record};
use sift_query::{Query, QueryAnalyzer, QueryError};
use tracing::{debug, warn};
pub use types::{SearchOutcome, TextHit};

use crate::{
    ItemError, ItemFailure, RankedResult, ScoredRecord,
    aggregate::{aggregate, apply_limit},
    grouping::group_snippets,
    match_record,
    params::{SearchParams, query_analyzer},
    window::best_window,
};

/// Runs searches with a fixed analyzer and parameter set.
///
/// A searcher holds no state between calls; every call takes its inputs
/// explicitly.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    /// Query analyzer.
    analyzer: QueryAnalyzer,
    /// Scoring parameters.
    params: SearchParams,
}

impl Searcher {
    /// Creates a searcher.
    pub fn new(analyzer: QueryAnalyzer, params: SearchParams) -> Self {
        Self { analyzer, params }
    }

    /// Creates a searcher from resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(query_analyzer(&config.query), SearchParams::from(config))
    }

    /// The scoring parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Mutable access to the scoring parameters.
    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    /// The query analyzer.
    pub fn analyzer(&self) -> &QueryAnalyzer {
        &self.analyzer
    }

    /// Parses a raw query with this searcher's analyzer.
    pub fn parse_query(&self, raw: &str) -> Result<Query, QueryError> {
        Query::parse(raw, &self.analyzer)
    }

    /// Ranks excerpts from text documents.
    pub fn search_text(&self, raw: &str, documents: &[Document]) -> SearchOutcome<TextHit> {
        let query = match self.parse_query(raw) {
            Ok(query) => query,
            Err(error) => {
                debug!(%error, "query rejected");
                return SearchOutcome::rejected(error);
            }
        };

        let per_document = fan_out(documents, self.params.parallel, |doc| {
            self.score_document(doc, &query)
        });
        let (sets, failures) = split_failures(per_document);

        let mut results = aggregate(sets);
        apply_limit(&mut results, self.params.limit);
        debug!(
            terms = query.term_count(),
            documents = documents.len(),
            failures = failures.len(),
            results = results.len(),
            mode = %self.params.mode,
            "text search complete"
        );

        SearchOutcome {
            query: Some(query),
            query_error: None,
            results,
            failures,
        }
    }

    /// Ranks metadata records.
    pub fn search_records(&self, raw: &str, records: &[Record]) -> SearchOutcome<ScoredRecord> {
        let query = match self.parse_query(raw) {
            Ok(query) => query,
            Err(error) => {
                debug!(%error, "query rejected");
                return SearchOutcome::rejected(error);
            }
        };

        let per_record = fan_out(records, self.params.parallel, |record| {
            self.score_record(record, &query)
        });
        let (sets, failures) = split_failures(per_record);

        let mut results = aggregate(sets);
        apply_limit(&mut results, self.params.limit);
        debug!(
            terms = query.term_count(),
            records = records.len(),
            failures = failures.len(),
            results = results.len(),
            "record search complete"
        );

        SearchOutcome {
            query: Some(query),
            query_error: None,
            results,
            failures,
        }
    }

    /// Validates and scores one document.
    fn score_document(
        &self,
        doc: &Document,
        query: &Query,
    ) -> Result<Vec<RankedResult<TextHit>>, ItemFailure> {
        doc.validate()
            .map_err(|e| ItemFailure::new(doc.path(), &ItemError::from(e)))?;

        let hits = match self.params.mode {
            TextMode::Window => best_window(doc, query.terms(), &self.params.window)
                .map(|excerpt| RankedResult::new(doc.path(), excerpt.score, TextHit::Window(excerpt)))
                .into_iter()
                .collect(),
            TextMode::Grouped => group_snippets(doc, query, &self.params.grouping)
                .into_iter()
                .map(|snippet| {
                    RankedResult::new(doc.path(), snippet.score, TextHit::Snippet(snippet))
                })
                .collect(),
        };
        Ok(hits)
    }

    /// Validates and scores one record.
    fn score_record(
        &self,
        record: &Record,
        query: &Query,
    ) -> Result<Vec<RankedResult<ScoredRecord>>, ItemFailure> {
        record
            .validate()
            .map_err(|e| ItemFailure::new(record.id.as_str(), &ItemError::from(e)))?;

        let scored = match_record(record, query, &self.params.records);
        if self.params.matched_only && !scored.has_text_match() {
            return Ok(Vec::new());
        }
        Ok(vec![RankedResult::new(
            record.id.as_str(),
            scored.score,
            scored,
        )])
    }
}

/// Ranks excerpts from text documents with default parameters.
pub fn search_text(raw: &str, documents: &[Document], mode: TextMode) -> Vec<RankedResult<TextHit>> {
    let params = SearchParams::default().with_mode(mode).with_limit(None);
    Searcher::new(QueryAnalyzer::default(), params)
        .search_text(raw, documents)
        .results
}

/// Ranks metadata records with default parameters.
pub fn search_records(raw: &str, records: &[Record]) -> Vec<RankedResult<ScoredRecord>> {
    let params = SearchParams::default().with_limit(None);
    Searcher::new(QueryAnalyzer::default(), params)
        .search_records(raw, records)
        .results
}

/// Applies `score` to every item, on the rayon pool when `parallel` is set.
///
/// Output order always matches input order.
fn fan_out<I, R, F>(items: &[I], parallel: bool, score: F) -> Vec<R>
where
    I: Sync,
    R: Send,
    F: Fn(&I) -> R + Sync + Send,
{
    if parallel {
        items.par_iter().map(score).collect()
    } else {
        items.iter().map(score).collect()
    }
}

/// Separates per-item results from per-item failures, logging each failure.
fn split_failures<T>(
    outcomes: Vec<Result<Vec<RankedResult<T>>, ItemFailure>>,
) -> (Vec<Vec<RankedResult<T>>>, Vec<ItemFailure>) {
    let mut sets = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(set) => sets.push(set),
            Err(failure) => {
                warn!(source = %failure.source, reason = %failure.reason, "skipping item");
                failures.push(failure);
            }
        }
    }
    (sets, failures)
}
