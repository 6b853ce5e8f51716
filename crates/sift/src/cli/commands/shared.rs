//! Shared helpers for command implementations.

use sift_config::{Config, TextMode};
use sift_engine::{SearchParams, Searcher, query_analyzer};
use sift_query::Query;

use crate::cli::output::{dim, subheader};

/// CLI options for search parameters that can override config defaults.
///
/// Used by `search` and `records`.
#[derive(Default)]
pub struct SearchParamsOverrides {
    /// Maximum results to return after aggregation.
    pub limit: Option<usize>,
    /// Excerpt mode for text documents.
    pub mode: Option<TextMode>,
    /// Lines per scoring window.
    pub window_size: Option<usize>,
    /// Maximum line distance between matches in one snippet.
    pub max_gap: Option<usize>,
    /// Context lines around each snippet.
    pub context: Option<usize>,
    /// Force the record text-match filter on.
    pub matched_only: bool,
    /// Force single-threaded scoring.
    pub sequential: bool,
}

impl SearchParamsOverrides {
    /// Builds `SearchParams` by applying CLI overrides to config defaults.
    pub fn build_params(&self, config: &Config) -> SearchParams {
        let mut params = SearchParams::from(config);
        if let Some(limit) = self.limit {
            params.limit = Some(limit);
        }
        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        if let Some(size) = self.window_size {
            params.window.size = size;
        }
        if let Some(max_gap) = self.max_gap {
            params.grouping.max_gap = max_gap;
        }
        if let Some(context) = self.context {
            params.grouping.context = context;
        }
        if self.matched_only {
            params.matched_only = true;
        }
        if self.sequential {
            params.parallel = false;
        }
        params
    }

    /// Builds a searcher from config, with these overrides applied.
    pub fn build_searcher(&self, config: &Config) -> Searcher {
        Searcher::new(query_analyzer(&config.query), self.build_params(config))
    }
}

/// Formats an optional limit for display.
fn format_limit(limit: Option<usize>) -> String {
    limit.map_or_else(|| "unlimited".to_string(), |l| l.to_string())
}

/// Prints how a query is analyzed and which parameters would be used.
pub fn print_explain(searcher: &Searcher, raw: &str, records: bool) {
    println!("{}", subheader("Query:"));
    println!("   {raw}");
    println!();

    println!("{}", subheader("Terms:"));
    match searcher.parse_query(raw) {
        Ok(query) => print_terms(&query),
        Err(e) => println!("   {}", dim(&format!("({e})"))),
    }
    println!();

    let params = searcher.params();
    println!("{}", subheader("Parameters:"));
    println!("   limit: {}", format_limit(params.limit));
    println!("   parallel: {}", params.parallel);
    if records {
        let w = &params.records;
        println!("   matched_only: {}", params.matched_only);
        println!("   description_weight: {}", w.description);
        println!("   verbatim_bonus: {}", w.verbatim);
        println!("   topic_weight: {}", w.topic);
        println!("   star_weight: {}", w.stars);
        println!("   fork_weight: {}", w.forks);
        return;
    }

    println!("   mode: {}", params.mode);
    match params.mode {
        TextMode::Window => {
            let w = &params.window;
            println!("   window_size: {}", w.effective_size());
            println!("   boost: {}", w.boost);
            println!("   divisor: {}", w.divisor);
            println!("   markers: {}", w.markers.join(", "));
        }
        TextMode::Grouped => {
            let g = &params.grouping;
            println!("   max_gap: {}", g.max_gap);
            println!("   context: {}", g.context);
            println!("   divisor: {}", g.divisor);
        }
    }
}

/// Prints the analyzed terms of a query, one per line.
fn print_terms(query: &Query) {
    for term in query.terms().iter() {
        println!("   {term}");
    }
    println!("   {}", dim(&format!("phrase: \"{}\"", query.phrase())));
}
