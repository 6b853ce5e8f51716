//! Query analysis for sift.
//!
//! Turns a free-text or keyword query into the ordered list of significant terms
//! that every scorer works from. Analysis is deliberately lexical:
//!
//! 1. Lowercase the query
//! 2. Delete characters that are neither word characters nor whitespace
//! 3. Split on whitespace
//! 4. Drop short tokens and stopwords
//!
//! A query whose term set comes out empty cannot match anything. [`Query::parse`]
//! rejects it with a [`QueryError`] so downstream scorers never divide by a zero
//! term count.

#![warn(missing_docs)]

mod analyze;
mod error;
mod query;
mod stopwords;
mod term;

pub use analyze::{DEFAULT_MIN_TERM_LENGTH, QueryAnalyzer, analyze, normalize};
pub use error::QueryError;
pub use query::Query;
pub use stopwords::Stopwords;
pub use term::TermSet;
