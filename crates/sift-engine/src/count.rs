//! Substring counting over lower-cased text.

/// Counts occurrences of `needle` in `haystack`, including overlapping ones.
///
/// `"aaaa"` contains `"aa"` three times. An empty needle never matches.
pub fn count_overlapping(haystack: &str, needle: &str) -> usize {
    let Some(first) = needle.chars().next() else {
        return 0;
    };
    let step = first.len_utf8();
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        count += 1;
        from += pos + step;
    }
    count
}

/// Counts non-overlapping occurrences of `needle` in `haystack`, scanning left to
/// right the way a regex global match does.
///
/// `"aaaa"` contains `"aa"` twice. An empty needle never matches.
pub fn count_non_overlapping(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Maps a raw score into `[0, 1]` by dividing by `term_count * divisor`.
///
/// Returns 0 when the divisor product is not positive, so normalization can never
/// divide by zero.
pub fn normalize(raw: f64, term_count: usize, divisor: f64) -> f64 {
    let denominator = term_count as f64 * divisor;
    if denominator <= 0.0 || !raw.is_finite() {
        return 0.0;
    }
    (raw / denominator).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_counts() {
        assert_eq!(count_overlapping("aaaa", "aa"), 3);
        assert_eq!(count_overlapping("add add", "add"), 2);
        assert_eq!(count_overlapping("nothing", "add"), 0);
        assert_eq!(count_overlapping("abc", ""), 0);
        assert_eq!(count_overlapping("ééé", "éé"), 2);
    }

    #[test]
    fn non_overlapping_counts() {
        assert_eq!(count_non_overlapping("aaaa", "aa"), 2);
        assert_eq!(count_non_overlapping("add add", "add"), 2);
        assert_eq!(count_non_overlapping("abc", ""), 0);
    }

    #[test]
    fn normalize_clamps_and_guards() {
        assert!((normalize(3.0, 2, 2.0) - 0.75).abs() < f64::EPSILON);
        assert!((normalize(100.0, 1, 2.0) - 1.0).abs() < f64::EPSILON);
        assert!(normalize(5.0, 0, 2.0).abs() < f64::EPSILON);
        assert!(normalize(5.0, 2, 0.0).abs() < f64::EPSILON);
        assert!(normalize(-1.0, 2, 2.0).abs() < f64::EPSILON);
    }
}
