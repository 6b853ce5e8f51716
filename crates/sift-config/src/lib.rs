//! Configuration system for sift.
//!
//! sift uses TOML configuration files named `.sift.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.sift.toml` files found, then loading `~/.sift.toml` as the global config with
//! lowest precedence.
//!
//! Every scoring constant the engine uses is configurable here: window size, the
//! structural-marker boost and marker list, the normalization divisors, snippet
//! grouping distances, and the record matcher weights. The defaults reproduce the
//! reference ranking exactly.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawGroupingSettings, RawQuerySettings, RawRecordSettings, RawSearchSettings,
    RawWindowSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default maximum results returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Default minimum query term length in characters.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;
/// Default number of lines in a scoring window.
pub const DEFAULT_WINDOW_SIZE: usize = 10;
/// Default multiplier for windows containing a structural marker.
pub const DEFAULT_WINDOW_BOOST: f64 = 1.5;
/// Default per-term divisor for window score normalization.
pub const DEFAULT_WINDOW_DIVISOR: f64 = 2.0;
/// Default structural markers that flag a window as containing a definition.
pub const DEFAULT_MARKERS: &[&str] = &["function", "class", "interface", "export", "import"];
/// Default maximum line distance between matches in one snippet.
pub const DEFAULT_MAX_GAP: usize = 3;
/// Default context lines added on each side of a snippet.
pub const DEFAULT_CONTEXT_LINES: usize = 2;
/// Default per-term divisor for snippet score normalization.
pub const DEFAULT_GROUPING_DIVISOR: f64 = 3.0;
/// Default points per query term found in a record description.
pub const DEFAULT_DESCRIPTION_WEIGHT: f64 = 2.0;
/// Default bonus when a record description contains the whole query.
pub const DEFAULT_VERBATIM_BONUS: f64 = 10.0;
/// Default points per query term found in a record's topics.
pub const DEFAULT_TOPIC_WEIGHT: f64 = 3.0;
/// Default multiplier for `log10(stars + 1)`.
pub const DEFAULT_STAR_WEIGHT: f64 = 0.5;
/// Default multiplier for `log10(forks + 1)`.
pub const DEFAULT_FORK_WEIGHT: f64 = 0.3;

/// Top-level merged configuration for sift.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.sift.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General search settings.
    pub search: SearchSettings,
    /// Query analysis settings.
    pub query: QuerySettings,
    /// Window scorer settings.
    pub window: WindowSettings,
    /// Match grouper settings.
    pub grouping: GroupingSettings,
    /// Record matcher settings.
    pub records: RecordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sift.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.sift.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: &self.search,
            query: &self.query,
            window: &self.window,
            grouping: &self.grouping,
            records: &self.records,
        };
        toml::to_string_pretty(&serializable).map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// How text documents are excerpted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// One best fixed-size window per document.
    #[default]
    Window,
    /// Every cluster of nearby matches, padded with context.
    Grouped,
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => write!(f, "window"),
            Self::Grouped => write!(f, "grouped"),
        }
    }
}

impl FromStr for TextMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "window" => Ok(Self::Window),
            "grouped" | "group" => Ok(Self::Grouped),
            other => Err(format!(
                "unknown mode '{other}' (expected 'window' or 'grouped')"
            )),
        }
    }
}

/// General search settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum results returned after aggregation.
    pub limit: usize,
    /// Default excerpt mode for text searches.
    pub mode: TextMode,
    /// Whether per-item scoring fans out across a thread pool.
    pub parallel: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            mode: TextMode::Window,
            parallel: true,
        }
    }
}

/// Query analysis settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Tokens with fewer characters than this are dropped.
    pub min_term_length: usize,
    /// Whether to add the ISO English stopword list to the fixed list.
    pub extended_stopwords: bool,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            extended_stopwords: false,
        }
    }
}

/// Window scorer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Lines per window.
    pub size: usize,
    /// Score multiplier for windows containing a structural marker.
    pub boost: f64,
    /// Per-term normalization divisor.
    pub divisor: f64,
    /// Structural markers, matched as plain substrings.
    pub markers: Vec<String>,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            boost: DEFAULT_WINDOW_BOOST,
            divisor: DEFAULT_WINDOW_DIVISOR,
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Match grouper settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupingSettings {
    /// Maximum line distance between consecutive matches in one cluster.
    pub max_gap: usize,
    /// Context lines added before and after each cluster.
    pub context: usize,
    /// Per-term normalization divisor.
    pub divisor: f64,
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            context: DEFAULT_CONTEXT_LINES,
            divisor: DEFAULT_GROUPING_DIVISOR,
        }
    }
}

/// Record matcher settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecordSettings {
    /// Points per term found in the description.
    pub description_weight: f64,
    /// Bonus when the description contains the whole query.
    pub verbatim_bonus: f64,
    /// Points per term found in any topic.
    pub topic_weight: f64,
    /// Multiplier for `log10(stars + 1)`.
    pub star_weight: f64,
    /// Multiplier for `log10(forks + 1)`.
    pub fork_weight: f64,
    /// Drop records with no textual overlap with the query.
    pub matched_only: bool,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            description_weight: DEFAULT_DESCRIPTION_WEIGHT,
            verbatim_bonus: DEFAULT_VERBATIM_BONUS,
            topic_weight: DEFAULT_TOPIC_WEIGHT,
            star_weight: DEFAULT_STAR_WEIGHT,
            fork_weight: DEFAULT_FORK_WEIGHT,
            matched_only: false,
        }
    }
}

/// Borrowed view of the settings sections for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// General search settings.
    search: &'a SearchSettings,
    /// Query analysis settings.
    query: &'a QuerySettings,
    /// Window scorer settings.
    window: &'a WindowSettings,
    /// Match grouper settings.
    grouping: &'a GroupingSettings,
    /// Record matcher settings.
    records: &'a RecordSettings,
}

#[cfg(test)]
mod test_support;
