//! Lexical relevance scoring and excerpting for sift.
//!
//! The engine ranks two corpora against a free-text query:
//!
//! - **Text documents** are excerpted either by the window scorer, which keeps the
//!   single best fixed-size run of lines per document, or by the match grouper,
//!   which returns every cluster of nearby matches padded with context.
//! - **Records** are scored on description and topic overlap plus a logarithmic
//!   popularity prior, with a generated justification.
//!
//! Results from every item are merged by a stable, score-descending aggregator.
//! All scoring is pure: the engine holds no state between calls and scores items
//! independently, in parallel when asked.
//!
//! # Example
//!
//! ```
//! use sift_document::Document;
//! use sift_engine::{TextMode, search_text};
//!
//! let doc = Document::from_lines("add.js", ["function add(a,b) {", "  return a + b;", "}"]);
//! let results = search_text("add function", &[doc], TextMode::Window);
//! assert_eq!(results[0].item.line_range(), (1, 3));
//! ```

#![warn(missing_docs)]

mod aggregate;
mod count;
mod error;
mod grouping;
mod params;
mod record;
mod search;
mod window;

pub use aggregate::{RankedResult, aggregate, aggregate_dedup_by_key, apply_limit};
pub use count::{count_non_overlapping, count_overlapping, normalize};
pub use error::{ItemError, ItemFailure};
pub use grouping::{Cluster, Snippet, cluster_lines, group_snippets, matched_lines, snippet_score};
pub use params::{GroupingParams, RecordWeights, SearchParams, WindowParams, query_analyzer};
pub use record::{ScoredRecord, match_record};
pub use search::{SearchOutcome, Searcher, TextHit, search_records, search_text};
pub use sift_config::TextMode;
pub use window::{Window, WindowExcerpt, best_window};
