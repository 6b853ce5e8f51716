//! Loading records from JSON or YAML files.
//!
//! A records file holds either a list of records or an object with an `items`
//! list, which is the shape of a GitHub repository search response. Entries are
//! decoded one at a time: a malformed entry is reported and skipped without
//! discarding the rest of the file.

use std::{fs, path::Path};

use serde::Serialize;

use crate::{LoadError, Record};

/// Serialization format of a records file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl RecordFormat {
    /// Picks the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// An entry of a records file that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLoadFailure {
    /// Zero-indexed position of the entry in the file.
    pub index: usize,
    /// Decoder error message.
    pub message: String,
}

/// Records decoded from a file, plus the entries that failed to decode.
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    /// Successfully decoded records, in file order.
    pub records: Vec<Record>,
    /// Entries that could not be decoded.
    pub failures: Vec<RecordLoadFailure>,
}

impl RecordBatch {
    /// Records an entry's decode result.
    fn push(&mut self, index: usize, result: Result<Record, String>) {
        match result {
            Ok(mut record) => {
                record.dedup_topics();
                self.records.push(record);
            }
            Err(message) => self.failures.push(RecordLoadFailure { index, message }),
        }
    }
}

/// Loads records from a JSON or YAML file, choosing the format by extension.
pub fn load_records(path: &Path) -> Result<RecordBatch, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records_str(&contents, RecordFormat::from_path(path), path)
}

/// Parses records from a string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_records_str(
    contents: &str,
    format: RecordFormat,
    path: &Path,
) -> Result<RecordBatch, LoadError> {
    match format {
        RecordFormat::Json => parse_json(contents, path),
        RecordFormat::Yaml => parse_yaml(contents, path),
    }
}

/// Decodes a JSON records document.
fn parse_json(contents: &str, path: &Path) -> Result<RecordBatch, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|source| LoadError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Object(mut map) => match map.remove("items") {
            Some(serde_json::Value::Array(entries)) => entries,
            _ => return Err(unexpected_shape(path)),
        },
        _ => return Err(unexpected_shape(path)),
    };

    let mut batch = RecordBatch::default();
    for (index, entry) in entries.into_iter().enumerate() {
        batch.push(
            index,
            serde_json::from_value(entry).map_err(|e| e.to_string()),
        );
    }
    Ok(batch)
}

/// Decodes a YAML records document.
fn parse_yaml(contents: &str, path: &Path) -> Result<RecordBatch, LoadError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|source| LoadError::ParseYaml {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = match value {
        serde_yaml::Value::Sequence(entries) => entries,
        serde_yaml::Value::Mapping(mut map) => match map.remove("items") {
            Some(serde_yaml::Value::Sequence(entries)) => entries,
            _ => return Err(unexpected_shape(path)),
        },
        _ => return Err(unexpected_shape(path)),
    };

    let mut batch = RecordBatch::default();
    for (index, entry) in entries.into_iter().enumerate() {
        batch.push(
            index,
            serde_yaml::from_value(entry).map_err(|e| e.to_string()),
        );
    }
    Ok(batch)
}

/// Builds the error for a document with the wrong top-level shape.
fn unexpected_shape(path: &Path) -> LoadError {
    LoadError::UnexpectedShape {
        path: path.to_path_buf(),
    }
}
