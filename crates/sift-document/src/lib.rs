//! Inputs searched by sift.
//!
//! Two corpora are supported:
//! - [`Document`]: line-oriented text such as source files
//! - [`Record`]: repository metadata with a description, topic tags, and
//!   popularity counters
//!
//! The caller owns acquisition. This crate only provides the value types, the
//! validation the engine runs before scoring each item, and convenience readers for
//! single files and record lists.

#![warn(missing_docs)]

mod document;
mod error;
mod load;
mod record;

pub use document::{Document, is_binary_file};
pub use error::{DocumentError, LoadError, RecordError};
pub use load::{RecordBatch, RecordFormat, RecordLoadFailure, load_records, parse_records_str};
pub use record::Record;
