//! Error types for documents and records.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or validating a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file extension marks a binary format.
    #[error("binary file type: {path}")]
    BinaryFileType {
        /// Path to the binary file.
        path: PathBuf,
    },

    /// The document has no identifying path.
    #[error("document has an empty path")]
    MissingPath,

    /// The content contains NUL bytes and is not line-oriented text.
    #[error("document {path} contains binary content")]
    BinaryContent {
        /// Identifying path of the document.
        path: String,
    },
}

/// Errors that can occur when validating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record has no identifier.
    #[error("record has an empty id")]
    MissingId,

    /// A topic tag is empty.
    #[error("record {id} has an empty topic")]
    EmptyTopic {
        /// Identifier of the record.
        id: String,
    },
}

/// Errors that abort loading a whole record file.
///
/// Problems with individual entries are reported as
/// [`RecordLoadFailure`](crate::RecordLoadFailure) instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file.
    #[error("failed to read records file {path}: {source}")]
    ReadFile {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse JSON records file {path}: {source}")]
    ParseJson {
        /// Path to the file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The file is not valid YAML.
    #[error("failed to parse YAML records file {path}: {source}")]
    ParseYaml {
        /// Path to the file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The top-level value is neither a list nor an object with an `items` list.
    #[error("records file {path} must contain a list of records or an `items` list")]
    UnexpectedShape {
        /// Path to the file.
        path: PathBuf,
    },
}
