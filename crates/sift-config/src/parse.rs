//! Configuration file parsing.
//!
//! Parses individual `.sift.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, TextMode};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// General search section.
    pub search: Option<RawSearchSettings>,
    /// Query analysis section.
    pub query: Option<RawQuerySettings>,
    /// Window scorer section.
    pub window: Option<RawWindowSettings>,
    /// Match grouper section.
    pub grouping: Option<RawGroupingSettings>,
    /// Record matcher section.
    pub records: Option<RawRecordSettings>,
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Maximum results after aggregation.
    pub limit: Option<usize>,
    /// Default text excerpt mode.
    pub mode: Option<TextMode>,
    /// Whether to score items in parallel.
    pub parallel: Option<bool>,
}

/// Raw `[query]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawQuerySettings {
    /// Minimum term length in characters.
    pub min_term_length: Option<usize>,
    /// Whether to use the extended stopword list.
    pub extended_stopwords: Option<bool>,
}

/// Raw `[window]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawWindowSettings {
    /// Lines per window.
    pub size: Option<usize>,
    /// Structural-marker boost.
    pub boost: Option<f64>,
    /// Normalization divisor.
    pub divisor: Option<f64>,
    /// Structural markers. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub markers: Option<Vec<String>>,
}

/// Raw `[grouping]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawGroupingSettings {
    /// Maximum gap between matches in one cluster.
    pub max_gap: Option<usize>,
    /// Context lines around each cluster.
    pub context: Option<usize>,
    /// Normalization divisor.
    pub divisor: Option<f64>,
}

/// Raw `[records]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawRecordSettings {
    /// Points per description term.
    pub description_weight: Option<f64>,
    /// Whole-query description bonus.
    pub verbatim_bonus: Option<f64>,
    /// Points per topic term.
    pub topic_weight: Option<f64>,
    /// Star popularity multiplier.
    pub star_weight: Option<f64>,
    /// Fork popularity multiplier.
    pub fork_weight: Option<f64>,
    /// Drop records with no textual match.
    pub matched_only: Option<bool>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
