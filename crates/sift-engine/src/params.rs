//! Tuning parameters for the scorers.
//!
//! Every constant the ranking depends on lives here rather than in the scorers, so
//! callers can reproduce or adjust the ranking from configuration.

use sift_config::{
    Config, DEFAULT_CONTEXT_LINES, DEFAULT_DESCRIPTION_WEIGHT, DEFAULT_FORK_WEIGHT,
    DEFAULT_GROUPING_DIVISOR, DEFAULT_MARKERS, DEFAULT_MAX_GAP, DEFAULT_SEARCH_LIMIT,
    DEFAULT_STAR_WEIGHT, DEFAULT_TOPIC_WEIGHT, DEFAULT_VERBATIM_BONUS, DEFAULT_WINDOW_BOOST,
    DEFAULT_WINDOW_DIVISOR, DEFAULT_WINDOW_SIZE, GroupingSettings, QuerySettings, RecordSettings,
    TextMode, WindowSettings,
};
use sift_query::{QueryAnalyzer, Stopwords};

/// Window scorer parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowParams {
    /// Lines per window. Zero is treated as one.
    pub size: usize,
    /// Multiplier for windows containing a structural marker.
    pub boost: f64,
    /// Per-term normalization divisor.
    pub divisor: f64,
    /// Lower-cased structural markers.
    pub markers: Vec<String>,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            boost: DEFAULT_WINDOW_BOOST,
            divisor: DEFAULT_WINDOW_DIVISOR,
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl WindowParams {
    /// Sets the window size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Window size with zero mapped to one.
    pub fn effective_size(&self) -> usize {
        self.size.max(1)
    }
}

impl From<&WindowSettings> for WindowParams {
    fn from(settings: &WindowSettings) -> Self {
        Self {
            size: settings.size,
            boost: settings.boost,
            divisor: settings.divisor,
            markers: settings
                .markers
                .iter()
                .filter(|m| !m.is_empty())
                .map(|m| m.to_lowercase())
                .collect(),
        }
    }
}

/// Match grouper parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingParams {
    /// Maximum line distance between consecutive matches in one cluster.
    pub max_gap: usize,
    /// Context lines added on each side of a cluster.
    pub context: usize,
    /// Per-term normalization divisor.
    pub divisor: f64,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            context: DEFAULT_CONTEXT_LINES,
            divisor: DEFAULT_GROUPING_DIVISOR,
        }
    }
}

impl From<&GroupingSettings> for GroupingParams {
    fn from(settings: &GroupingSettings) -> Self {
        Self {
            max_gap: settings.max_gap,
            context: settings.context,
            divisor: settings.divisor,
        }
    }
}

/// Record matcher weights.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordWeights {
    /// Points per term found in the description.
    pub description: f64,
    /// Bonus when the description contains the whole query.
    pub verbatim: f64,
    /// Points per term found in any topic.
    pub topic: f64,
    /// Multiplier for `log10(stars + 1)`.
    pub stars: f64,
    /// Multiplier for `log10(forks + 1)`.
    pub forks: f64,
}

impl Default for RecordWeights {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION_WEIGHT,
            verbatim: DEFAULT_VERBATIM_BONUS,
            topic: DEFAULT_TOPIC_WEIGHT,
            stars: DEFAULT_STAR_WEIGHT,
            forks: DEFAULT_FORK_WEIGHT,
        }
    }
}

impl From<&RecordSettings> for RecordWeights {
    fn from(settings: &RecordSettings) -> Self {
        Self {
            description: settings.description_weight,
            verbatim: settings.verbatim_bonus,
            topic: settings.topic_weight,
            stars: settings.star_weight,
            forks: settings.fork_weight,
        }
    }
}

/// Parameters for a whole search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Excerpt mode for text searches.
    pub mode: TextMode,
    /// Maximum results after aggregation. `None` is unlimited.
    pub limit: Option<usize>,
    /// Score items on the rayon thread pool.
    pub parallel: bool,
    /// Drop records with no textual overlap with the query.
    pub matched_only: bool,
    /// Window scorer parameters.
    pub window: WindowParams,
    /// Match grouper parameters.
    pub grouping: GroupingParams,
    /// Record matcher weights.
    pub records: RecordWeights,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            mode: TextMode::Window,
            limit: Some(DEFAULT_SEARCH_LIMIT),
            parallel: true,
            matched_only: false,
            window: WindowParams::default(),
            grouping: GroupingParams::default(),
            records: RecordWeights::default(),
        }
    }
}

impl SearchParams {
    /// Sets the text excerpt mode.
    pub fn with_mode(mut self, mode: TextMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the result limit.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables the record text-match filter.
    pub fn with_matched_only(mut self, matched_only: bool) -> Self {
        self.matched_only = matched_only;
        self
    }
}

impl From<&Config> for SearchParams {
    fn from(config: &Config) -> Self {
        Self {
            mode: config.search.mode,
            limit: Some(config.search.limit),
            parallel: config.search.parallel,
            matched_only: config.records.matched_only,
            window: WindowParams::from(&config.window),
            grouping: GroupingParams::from(&config.grouping),
            records: RecordWeights::from(&config.records),
        }
    }
}

/// Builds the query analyzer described by a `[query]` section.
pub fn query_analyzer(settings: &QuerySettings) -> QueryAnalyzer {
    let stopwords = if settings.extended_stopwords {
        Stopwords::extended()
    } else {
        Stopwords::new()
    };
    QueryAnalyzer::new(stopwords, settings.min_term_length)
}
