//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`. Each setting
//! takes its value from the closest config that defines it.

use std::path::PathBuf;

use crate::{
    Config, GroupingSettings, QuerySettings, RecordSettings, SearchSettings, WindowSettings,
    parse::{
        RawConfig, RawGroupingSettings, RawQuerySettings, RawRecordSettings, RawSearchSettings,
        RawWindowSettings,
    },
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config).
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut config = Config::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref v) = raw.search {
            apply_search(&mut config.search, v);
        }
        if let Some(ref v) = raw.query {
            apply_query(&mut config.query, v);
        }
        if let Some(ref v) = raw.window {
            apply_window(&mut config.window, v);
        }
        if let Some(ref v) = raw.grouping {
            apply_grouping(&mut config.grouping, v);
        }
        if let Some(ref v) = raw.records {
            apply_records(&mut config.records, v);
        }
    }

    config.config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);
    config.sources = configs.iter().map(|c| c.path.clone()).collect();
    config
}

/// Applies a raw `[search]` section.
fn apply_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.mode {
        result.mode = v;
    }
    if let Some(v) = raw.parallel {
        result.parallel = v;
    }
}

/// Applies a raw `[query]` section.
fn apply_query(result: &mut QuerySettings, raw: &RawQuerySettings) {
    if let Some(v) = raw.min_term_length {
        result.min_term_length = v;
    }
    if let Some(v) = raw.extended_stopwords {
        result.extended_stopwords = v;
    }
}

/// Applies a raw `[window]` section.
fn apply_window(result: &mut WindowSettings, raw: &RawWindowSettings) {
    if let Some(v) = raw.size {
        result.size = v;
    }
    if let Some(v) = raw.boost {
        result.boost = v;
    }
    if let Some(v) = raw.divisor {
        result.divisor = v;
    }
    if let Some(ref v) = raw.markers {
        result.markers = v.clone();
    }
}

/// Applies a raw `[grouping]` section.
fn apply_grouping(result: &mut GroupingSettings, raw: &RawGroupingSettings) {
    if let Some(v) = raw.max_gap {
        result.max_gap = v;
    }
    if let Some(v) = raw.context {
        result.context = v;
    }
    if let Some(v) = raw.divisor {
        result.divisor = v;
    }
}

/// Applies a raw `[records]` section.
fn apply_records(result: &mut RecordSettings, raw: &RawRecordSettings) {
    if let Some(v) = raw.description_weight {
        result.description_weight = v;
    }
    if let Some(v) = raw.verbatim_bonus {
        result.verbatim_bonus = v;
    }
    if let Some(v) = raw.topic_weight {
        result.topic_weight = v;
    }
    if let Some(v) = raw.star_weight {
        result.star_weight = v;
    }
    if let Some(v) = raw.fork_weight {
        result.fork_weight = v;
    }
    if let Some(v) = raw.matched_only {
        result.matched_only = v;
    }
}
