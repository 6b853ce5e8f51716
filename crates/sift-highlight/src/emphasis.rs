//! Emphasis of query terms inside plain text.

use std::ops::Range;

use crate::colors;

/// Returns merged byte ranges where any term occurs in `text`, ignoring ASCII case.
///
/// Terms are expected in lowercase. Overlapping and adjacent ranges are merged.
pub fn term_ranges<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<Range<usize>> {
    let lowered = text.to_ascii_lowercase();
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for term in terms {
        let term = term.as_ref();
        if term.is_empty() {
            continue;
        }
        ranges.extend(
            lowered
                .match_indices(term)
                .map(|(start, m)| start..start + m.len()),
        );
    }
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Wraps every occurrence of any term in bold yellow.
pub fn emphasize_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    let ranges = term_ranges(text, terms);
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len() + ranges.len() * 12);
    let mut cursor = 0;
    for range in ranges {
        output.push_str(&text[cursor..range.start]);
        output.push_str(colors::BOLD);
        output.push_str(colors::YELLOW);
        output.push_str(&text[range.clone()]);
        output.push_str(colors::RESET);
        cursor = range.end;
    }
    output.push_str(&text[cursor..]);
    output
}
