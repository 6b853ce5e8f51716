//! Proximity grouping of matched lines into snippets.
//!
//! Unlike the window scorer, which keeps one excerpt per document, the grouper
//! returns every cluster of nearby matches. Each cluster is padded with context
//! lines and scored on its own.

use serde::Serialize;
use sift_document::Document;
use sift_query::{Query, TermSet};

use crate::{
    count::{count_non_overlapping, normalize},
    params::GroupingParams,
};

/// A padded run of lines built around a cluster of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    /// Document path.
    pub path: String,
    /// One-indexed first line of the reported range, inclusive.
    pub line_start: usize,
    /// One-indexed last line of the reported range, inclusive.
    pub line_end: usize,
    /// One-indexed lines inside the range that contain a query term.
    pub matched_lines: Vec<usize>,
    /// The range's lines joined with `\n`, in their original case.
    pub text: String,
    /// Score normalized into `[0, 1]`.
    pub score: f64,
}

/// An inclusive run of zero-indexed matched lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    /// First matched line.
    pub start: usize,
    /// Last matched line.
    pub end: usize,
}

/// Returns the zero-indexed lines containing at least one term, in order.
pub fn matched_lines(doc: &Document, terms: &TermSet) -> Vec<usize> {
    doc.lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| terms.any_in(&line.to_lowercase()))
        .map(|(i, _)| i)
        .collect()
}

/// Merges sorted line indices into clusters.
///
/// A line joins the current cluster when it is at most `max_gap` lines after the
/// cluster's last line.
pub fn cluster_lines(lines: &[usize], max_gap: usize) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut iter = lines.iter().copied();
    let Some(first) = iter.next() else {
        return clusters;
    };

    let mut current = Cluster {
        start: first,
        end: first,
    };
    for line in iter {
        if line.saturating_sub(current.end) <= max_gap {
            current.end = line;
        } else {
            clusters.push(current);
            current = Cluster {
                start: line,
                end: line,
            };
        }
    }
    clusters.push(current);
    clusters
}

/// Builds and scores every snippet in a document.
///
/// Returns an empty list when no line matches. Snippets are in document order.
pub fn group_snippets(doc: &Document, query: &Query, params: &GroupingParams) -> Vec<Snippet> {
    if doc.is_empty() {
        return Vec::new();
    }
    let matched = matched_lines(doc, query.terms());
    let last = doc.line_count() - 1;
    let phrase = query.phrase();

    cluster_lines(&matched, params.max_gap)
        .into_iter()
        .map(|cluster| {
            let context_start = cluster.start.saturating_sub(params.context);
            let context_end = cluster.end.saturating_add(params.context).min(last);
            let text = doc.join_lines(context_start..context_end + 1);
            let score = snippet_score(&text.to_lowercase(), query.terms(), &phrase, params.divisor);
            Snippet {
                path: doc.path().to_string(),
                line_start: context_start + 1,
                line_end: context_end + 1,
                matched_lines: matched
                    .iter()
                    .filter(|&&l| l >= cluster.start && l <= cluster.end)
                    .map(|l| l + 1)
                    .collect(),
                text,
                score,
            }
        })
        .collect()
}

/// Scores lower-cased snippet text by term frequency plus a whole-query bonus.
///
/// The bonus equals the term count when the query phrase appears verbatim.
pub fn snippet_score(text: &str, terms: &TermSet, phrase: &str, divisor: f64) -> f64 {
    let hits: usize = terms.iter().map(|t| count_non_overlapping(text, t)).sum();
    let bonus = if !phrase.is_empty() && text.contains(phrase) {
        terms.len()
    } else {
        0
    };
    normalize((hits + bonus) as f64, terms.len(), divisor)
}
