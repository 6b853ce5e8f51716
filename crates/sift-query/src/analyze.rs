//! Query normalization and term extraction.

use crate::{Stopwords, TermSet};

/// Default minimum term length in characters. Shorter tokens are dropped.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;

/// Turns raw query strings into significant terms.
///
/// Analysis lowercases the query, deletes every character that is neither a word
/// character (alphanumeric or `_`) nor whitespace, splits on whitespace, and drops
/// tokens that are shorter than the minimum length or are stopwords.
#[derive(Debug, Clone)]
pub struct QueryAnalyzer {
    /// Stopword filter applied to every token.
    stopwords: Stopwords,
    /// Tokens with fewer characters than this are dropped.
    min_term_length: usize,
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new(Stopwords::new(), DEFAULT_MIN_TERM_LENGTH)
    }
}

impl QueryAnalyzer {
    /// Creates an analyzer with the given stopwords and minimum term length.
    pub fn new(stopwords: Stopwords, min_term_length: usize) -> Self {
        Self {
            stopwords,
            min_term_length,
        }
    }

    /// Returns the minimum term length in characters.
    pub fn min_term_length(&self) -> usize {
        self.min_term_length
    }

    /// Extracts the significant terms from `raw`.
    ///
    /// Returns an empty set when nothing survives filtering.
    pub fn analyze(&self, raw: &str) -> TermSet {
        let normalized = normalize(raw);
        TermSet::from_terms(
            normalized
                .split_whitespace()
                .filter(|token| self.is_significant(token)),
        )
    }

    /// Checks a normalized token against the length and stopword filters.
    fn is_significant(&self, token: &str) -> bool {
        token.chars().count() >= self.min_term_length && !self.stopwords.contains(token)
    }
}

/// Lowercases `raw` and deletes characters that are neither word characters nor
/// whitespace.
///
/// Punctuation is removed rather than replaced, so `"foo-bar"` becomes `"foobar"`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect()
}

/// Word characters: Unicode alphanumerics and underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Analyzes `raw` with the default analyzer.
pub fn analyze(raw: &str) -> TermSet {
    QueryAnalyzer::default().analyze(raw)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
        assert_eq!(normalize("foo-bar.baz()"), "foobarbaz");
        assert_eq!(normalize("snake_case stays"), "snake_case stays");
    }

    #[test]
    fn analyze_drops_short_tokens_and_stopwords() {
        let terms = analyze("How do I parse the JSON config in Rust?");
        assert_eq!(terms.as_slice(), ["how", "parse", "json", "config", "rust"]);
    }

    #[test]
    fn analyze_keeps_query_order() {
        let terms = analyze("add function");
        assert_eq!(terms.as_slice(), ["add", "function"]);
    }

    #[test]
    fn analyze_keeps_duplicates() {
        let terms = analyze("cache cache invalidation");
        assert_eq!(terms.as_slice(), ["cache", "cache", "invalidation"]);
    }

    #[test]
    fn analyze_empty_when_nothing_survives() {
        assert!(analyze("").is_empty());
        assert!(analyze("   ").is_empty());
        assert!(analyze("a to of it").is_empty());
        assert!(analyze("?!, ...").is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(analyze("éé").is_empty());
        assert_eq!(analyze("ééé").as_slice(), ["ééé"]);
    }

    #[test]
    fn custom_min_length() {
        let analyzer = QueryAnalyzer::new(Stopwords::new(), 5);
        assert_eq!(analyzer.analyze("parse json config").as_slice(), ["parse", "config"]);
    }

    #[test]
    fn extended_stopwords_filter_more() {
        let analyzer = QueryAnalyzer::new(Stopwords::extended(), DEFAULT_MIN_TERM_LENGTH);
        let terms = analyzer.analyze("their parser");
        assert!(!terms.contains("their"));
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn terms_are_lowercase_long_and_not_stopwords(raw in ".{0,80}") {
                let stopwords = Stopwords::new();
                for term in &analyze(&raw) {
                    prop_assert!(term.chars().count() >= DEFAULT_MIN_TERM_LENGTH);
                    prop_assert_eq!(term, &term.to_lowercase());
                    prop_assert!(!stopwords.contains(term));
                    prop_assert!(term.chars().all(is_word_char));
                }
            }
        }
    }
}
