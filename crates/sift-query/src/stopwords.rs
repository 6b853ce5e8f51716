//! Stopword filtering for query analysis.
//!
//! The default filter is a fixed list of English function words: articles,
//! conjunctions, prepositions, auxiliary verbs and pronouns. These carry no
//! signal when matched as substrings against source code or repository
//! descriptions.
//!
//! An extended filter additionally includes the ISO English stopword list from
//! the `stop-words` crate, for callers who prefer aggressive filtering of
//! natural-language queries.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// A stopword filter for query terms.
///
/// All words are stored in lowercase; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates the fixed English function-word filter.
    pub fn new() -> Self {
        let mut stopwords = Self {
            words: HashSet::new(),
        };
        stopwords.add_words(ARTICLES);
        stopwords.add_words(CONJUNCTIONS);
        stopwords.add_words(PREPOSITIONS);
        stopwords.add_words(AUXILIARY_VERBS);
        stopwords.add_words(PRONOUNS);
        stopwords
    }

    /// Creates a filter with the fixed list plus the ISO English stopwords.
    pub fn extended() -> Self {
        let mut stopwords = Self::new();
        stopwords.add_words(stop_words::get(LANGUAGE::English));
        stopwords
    }

    /// Adds words to the filter in lowercase.
    fn add_words(&mut self, slice: &[&str]) {
        for word in slice {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Checks if a term is a stopword.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// English articles.
static ARTICLES: &[&str] = &["a", "an", "the"];

/// Coordinating and common subordinating conjunctions.
static CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "then", "than", "because", "while", "although",
    "unless", "whether",
];

/// Common English prepositions.
static PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "onto", "upon", "within", "without", "via", "as",
];

/// Auxiliary and modal verbs.
static AUXILIARY_VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must",
];

/// Personal, possessive, demonstrative and interrogative pronouns.
static PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "this", "that",
    "these", "those", "what", "which", "who", "whom", "whose",
];
