//! Sliding-window scoring.
//!
//! Every run of `size` consecutive lines is scored by counting query term
//! occurrences in its lower-cased text. Windows containing a structural marker
//! (`function`, `class`, ...) are boosted, biasing results toward definitions over
//! incidental mentions. The best window is returned as the document's excerpt.

use serde::Serialize;
use sift_document::Document;
use sift_query::TermSet;

use crate::{
    count::{count_overlapping, normalize},
    params::WindowParams,
};

/// A scored window over a document's lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    /// Zero-indexed first line.
    pub start: usize,
    /// Zero-indexed line one past the end.
    pub end: usize,
    /// Raw score: total term occurrences, boosted when a marker is present.
    pub score: f64,
    /// Whether the window text contains a structural marker.
    pub has_marker: bool,
}

impl Window {
    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the window covers no lines.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// The best window of a document, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowExcerpt {
    /// Document path.
    pub path: String,
    /// The winning window.
    pub window: Window,
    /// One-indexed first line, inclusive.
    pub line_start: usize,
    /// One-indexed last line, inclusive.
    pub line_end: usize,
    /// The window's lines joined with `\n`, in their original case.
    pub text: String,
    /// Score normalized into `[0, 1]`.
    pub score: f64,
}

/// Finds the highest-scoring window in a document.
///
/// Returns `None` for an empty document, an empty term set, or when no window
/// contains any term. On equal scores the earliest window wins.
pub fn best_window(doc: &Document, terms: &TermSet, params: &WindowParams) -> Option<WindowExcerpt> {
    if doc.is_empty() || terms.is_empty() {
        return None;
    }

    let lowered: Vec<String> = doc.lines().iter().map(|l| l.to_lowercase()).collect();
    let size = params.effective_size().min(lowered.len());

    let mut best: Option<Window> = None;
    for start in 0..=lowered.len() - size {
        let window = score_window(&lowered, start, start + size, terms, params);
        if best.as_ref().is_none_or(|b| window.score > b.score) {
            best = Some(window);
        }
    }

    let window = best.filter(|w| w.score > 0.0)?;
    let score = normalize(window.score, terms.len(), params.divisor);
    Some(WindowExcerpt {
        path: doc.path().to_string(),
        line_start: window.start + 1,
        line_end: window.end,
        text: doc.join_lines(window.start..window.end),
        score,
        window,
    })
}

/// Scores the lower-cased lines in `[start, end)`.
fn score_window(
    lowered: &[String],
    start: usize,
    end: usize,
    terms: &TermSet,
    params: &WindowParams,
) -> Window {
    let blob = lowered[start..end].join("\n");
    let hits: usize = terms.iter().map(|t| count_overlapping(&blob, t)).sum();
    let has_marker = params.markers.iter().any(|m| blob.contains(m.as_str()));

    let mut score = hits as f64;
    if has_marker {
        score *= params.boost;
    }

    Window {
        start,
        end,
        score: score.max(0.0),
        has_marker,
    }
}
