//! Merging and ranking result sets.
//!
//! Results from several sources are concatenated and sorted by descending score.
//! The sort is stable, so results with equal scores keep their input order and the
//! output is reproducible for identical inputs.

use std::{cmp::Ordering, collections::HashSet, hash::Hash};

use serde::Serialize;

/// A scored result payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<T> {
    /// Document path or record id.
    pub source: String,
    /// Ranking score. Normalized into `[0, 1]` for text hits.
    pub score: f64,
    /// The payload.
    pub item: T,
}

impl<T> RankedResult<T> {
    /// Creates a ranked result.
    pub fn new(source: impl Into<String>, score: f64, item: T) -> Self {
        Self {
            source: source.into(),
            score,
            item,
        }
    }
}

/// Descending score order under IEEE total ordering.
fn by_score_desc<T>(a: &RankedResult<T>, b: &RankedResult<T>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Concatenates result sets and sorts them by descending score.
///
/// Equal scores keep their relative input order. Nothing is deduplicated.
pub fn aggregate<T, I>(sets: I) -> Vec<RankedResult<T>>
where
    I: IntoIterator<Item = Vec<RankedResult<T>>>,
{
    let mut results: Vec<RankedResult<T>> = sets.into_iter().flatten().collect();
    results.sort_by(by_score_desc);
    results
}

/// Like [`aggregate`], but keeps only the highest-ranked result for each key.
///
/// When two results share a key and a score, the one seen first wins.
pub fn aggregate_dedup_by_key<T, I, K, F>(sets: I, key: F) -> Vec<RankedResult<T>>
where
    I: IntoIterator<Item = Vec<RankedResult<T>>>,
    K: Eq + Hash,
    F: Fn(&RankedResult<T>) -> K,
{
    let mut seen = HashSet::new();
    aggregate(sets)
        .into_iter()
        .filter(|result| seen.insert(key(result)))
        .collect()
}

/// Truncates results to `limit` when one is set.
pub fn apply_limit<T>(results: &mut Vec<RankedResult<T>>, limit: Option<usize>) {
    if let Some(limit) = limit {
        results.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(source: &str, score: f64) -> RankedResult<()> {
        RankedResult::new(source, score, ())
    }

    fn sources<T>(results: &[RankedResult<T>]) -> Vec<&str> {
        results.iter().map(|r| r.source.as_str()).collect()
    }

    #[test]
    fn stable_on_equal_scores() {
        let out = aggregate([vec![ranked("A", 5.0), ranked("B", 5.0), ranked("C", 3.0)]]);
        assert_eq!(sources(&out), ["A", "B", "C"]);
    }

    #[test]
    fn interleaves_sets() {
        let out = aggregate([
            vec![ranked("a1", 0.2), ranked("a2", 0.9)],
            vec![ranked("b1", 0.5), ranked("b2", 0.9)],
        ]);
        assert_eq!(sources(&out), ["a2", "b2", "b1", "a1"]);
    }

    #[test]
    fn keeps_duplicates() {
        let out = aggregate([vec![ranked("A", 1.0)], vec![ranked("A", 1.0)]]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_input() {
        let out = aggregate(Vec::<Vec<RankedResult<()>>>::new());
        assert!(out.is_empty());
    }

    #[test]
    fn nan_does_not_panic() {
        let out = aggregate([vec![ranked("A", f64::NAN), ranked("B", 1.0)]]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn dedup_keeps_best() {
        let out = aggregate_dedup_by_key(
            [
                vec![ranked("A", 0.3), ranked("B", 0.4)],
                vec![ranked("A", 0.8)],
            ],
            |r| r.source.clone(),
        );
        assert_eq!(sources(&out), ["A", "B"]);
        assert!((out[0].score - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn limit_truncates() {
        let mut results = vec![ranked("A", 3.0), ranked("B", 2.0), ranked("C", 1.0)];
        apply_limit(&mut results, Some(2));
        assert_eq!(sources(&results), ["A", "B"]);
        apply_limit(&mut results, None);
        assert_eq!(results.len(), 2);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Output is sorted descending and loses nothing.
            #[test]
            fn prop_sorted_and_complete(
                sets in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 0..8), 0..5),
            ) {
                let total: usize = sets.iter().map(Vec::len).sum();
                let input: Vec<Vec<RankedResult<usize>>> = sets
                    .iter()
                    .enumerate()
                    .map(|(s, scores)| {
                        scores
                            .iter()
                            .map(|&score| RankedResult::new(format!("s{s}"), score, 0))
                            .collect()
                    })
                    .collect();
                let out = aggregate(input);
                prop_assert_eq!(out.len(), total);
                prop_assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
            }

            /// Equal scores retain input order.
            #[test]
            fn prop_ties_keep_input_order(n in 1usize..30) {
                let input = vec![(0..n).map(|i| RankedResult::new(i.to_string(), 1.0, i)).collect()];
                let out = aggregate(input);
                let order: Vec<usize> = out.iter().map(|r| r.item).collect();
                prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
            }
        }
    }
}
