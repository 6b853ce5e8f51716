//! sift: lexical relevance search for source files and repository records.
//!
//! sift ranks excerpts of source files, or repository metadata records, against a
//! free-text query. It uses lexical heuristics only: term frequency in sliding
//! windows or clustered snippets for text, and description, topic, and popularity
//! signals for records.

#![warn(missing_docs)]

pub mod cli;
