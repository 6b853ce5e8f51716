//! Configuration validation.
//!
//! Reports settings that parse cleanly but would make ranking degenerate.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// `[search] limit` is zero, so every search returns nothing.
    ZeroLimit,
    /// `[window] size` is zero; it is treated as one line.
    ZeroWindowSize,
    /// A normalization divisor is zero or negative.
    NonPositiveDivisor {
        /// Section holding the divisor.
        section: &'static str,
        /// Configured value.
        value: f64,
    },
    /// The structural-marker boost would penalize definitions.
    BoostBelowOne {
        /// Configured value.
        value: f64,
    },
    /// A record weight is negative, which can produce negative scores.
    NegativeWeight {
        /// Name of the weight.
        name: &'static str,
        /// Configured value.
        value: f64,
    },
    /// No structural markers are configured, so the boost never applies.
    NoMarkers,
    /// A structural marker is empty and would match every window.
    EmptyMarker,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLimit => write!(f, "search limit is 0; searches will return no results"),
            Self::ZeroWindowSize => write!(f, "window size is 0; using 1 line per window"),
            Self::NonPositiveDivisor { section, value } => {
                write!(
                    f,
                    "[{section}] divisor must be positive (got {value}); normalized scores will be 0"
                )
            }
            Self::BoostBelowOne { value } => {
                write!(
                    f,
                    "window boost {value} is below 1.0; structural markers will lower scores"
                )
            }
            Self::NegativeWeight { name, value } => {
                write!(f, "record weight '{name}' is negative ({value})")
            }
            Self::NoMarkers => write!(f, "no structural markers configured; boost never applies"),
            Self::EmptyMarker => write!(f, "empty structural marker matches every window"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.search.limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit);
    }

    let window = &config.window;
    if window.size == 0 {
        warnings.push(ConfigWarning::ZeroWindowSize);
    }
    if window.divisor <= 0.0 {
        warnings.push(ConfigWarning::NonPositiveDivisor {
            section: "window",
            value: window.divisor,
        });
    }
    if window.boost < 1.0 {
        warnings.push(ConfigWarning::BoostBelowOne {
            value: window.boost,
        });
    }
    if window.markers.is_empty() {
        warnings.push(ConfigWarning::NoMarkers);
    } else if window.markers.iter().any(|m| m.is_empty()) {
        warnings.push(ConfigWarning::EmptyMarker);
    }

    if config.grouping.divisor <= 0.0 {
        warnings.push(ConfigWarning::NonPositiveDivisor {
            section: "grouping",
            value: config.grouping.divisor,
        });
    }

    let records = &config.records;
    let weights = [
        ("description_weight", records.description_weight),
        ("verbatim_bonus", records.verbatim_bonus),
        ("topic_weight", records.topic_weight),
        ("star_weight", records.star_weight),
        ("fork_weight", records.fork_weight),
    ];
    for (name, value) in weights {
        if value < 0.0 {
            warnings.push(ConfigWarning::NegativeWeight { name, value });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_warnings() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn test_zero_values() {
        let mut config = Config::default();
        config.search.limit = 0;
        config.window.size = 0;
        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            [ConfigWarning::ZeroLimit, ConfigWarning::ZeroWindowSize]
        );
    }

    #[test]
    fn test_divisors_and_boost() {
        let mut config = Config::default();
        config.window.divisor = 0.0;
        config.window.boost = 0.5;
        config.grouping.divisor = -1.0;
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.contains(&ConfigWarning::NonPositiveDivisor {
            section: "window",
            value: 0.0
        }));
        assert!(warnings.contains(&ConfigWarning::BoostBelowOne { value: 0.5 }));
        assert!(warnings.contains(&ConfigWarning::NonPositiveDivisor {
            section: "grouping",
            value: -1.0
        }));
    }

    #[test]
    fn test_markers() {
        let mut config = Config::default();
        config.window.markers.clear();
        assert_eq!(validate_config(&config), [ConfigWarning::NoMarkers]);

        config.window.markers = vec!["fn".into(), String::new()];
        assert_eq!(validate_config(&config), [ConfigWarning::EmptyMarker]);
    }

    #[test]
    fn test_negative_weight() {
        let mut config = Config::default();
        config.records.star_weight = -0.5;
        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            [ConfigWarning::NegativeWeight {
                name: "star_weight",
                value: -0.5
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "record weight 'star_weight' is negative (-0.5)"
        );
    }
}
