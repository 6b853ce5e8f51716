//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use sift_document::RecordLoadFailure;
use sift_engine::{ItemFailure, RankedResult, ScoredRecord, SearchOutcome, TextHit};
use sift_highlight::{Highlighter, colors, emphasize_terms};
pub use sift_highlight::{dim, header, subheader, warning};
use sift_query::TermSet;

use crate::cli::args::OutputArgs;

/// JSON output for `sift search`.
#[derive(Serialize)]
struct JsonTextOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Terms the query was analyzed into.
    terms: TermSet,
    /// Ranked excerpts.
    results: &'a [RankedResult<TextHit>],
    /// Files that could not be read or scored.
    failures: Vec<&'a ItemFailure>,
}

/// JSON output for `sift records`.
#[derive(Serialize)]
struct JsonRecordOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Terms the query was analyzed into.
    terms: TermSet,
    /// Ranked records.
    results: &'a [RankedResult<ScoredRecord>],
    /// Records that failed validation.
    failures: &'a [ItemFailure],
    /// Entries of the records file that could not be decoded.
    load_failures: &'a [RecordLoadFailure],
}

/// Prints a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a warning when the query was rejected during analysis.
fn report_query_error<T>(outcome: &SearchOutcome<T>) {
    if let Some(e) = &outcome.query_error {
        eprintln!("warning: {e}");
    }
}

/// Prints text search results.
///
/// `read_failures` are files that could not be loaded before scoring.
pub fn output_text_results(
    raw: &str,
    outcome: &SearchOutcome<TextHit>,
    read_failures: &[ItemFailure],
    output: &OutputArgs,
) -> ExitCode {
    report_query_error(outcome);

    if output.json {
        let json_output = JsonTextOutput {
            query: raw,
            terms: outcome.terms(),
            results: &outcome.results,
            failures: read_failures.iter().chain(&outcome.failures).collect(),
        };
        return print_json(&json_output);
    }

    for failure in &outcome.failures {
        eprintln!("warning: skipped {}: {}", failure.source, failure.reason);
    }

    if outcome.is_empty() {
        println!("No results.");
        return ExitCode::SUCCESS;
    }

    let terms = outcome.terms();
    let highlighter = (!output.no_color).then(Highlighter::new);
    for (i, result) in outcome.results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!(
            "{}",
            format_text_hit(&result.item, terms.as_slice(), highlighter.as_ref())
        );
    }

    ExitCode::SUCCESS
}

/// Formats one excerpt: a `path:start-end` header followed by numbered lines.
///
/// Lines known to contain a query term are marked with `>` in the gutter. With a
/// highlighter, the excerpt is syntax highlighted when its extension is known and
/// query terms are emphasized otherwise.
fn format_text_hit(hit: &TextHit, terms: &[String], highlighter: Option<&Highlighter>) -> String {
    let (start, end) = hit.line_range();
    let location = format!("{}:{start}-{end}", hit.path());
    let score = format!("(score {:.3})", hit.score());

    let mut out = String::new();
    match highlighter {
        Some(_) => out.push_str(&format!("{} {}\n", header(&location), dim(&score))),
        None => out.push_str(&format!("{location} {score}\n")),
    }

    let body = match highlighter {
        Some(hl) => hl
            .highlight_path(hit.text(), hit.path())
            .unwrap_or_else(|| emphasize_terms(hit.text(), terms)),
        None => hit.text().to_string(),
    };

    let width = end.to_string().len();
    for (offset, line) in body.lines().enumerate() {
        let number = start + offset;
        let mark = if hit.matched_lines().contains(&number) {
            '>'
        } else {
            ' '
        };
        let gutter = format!("{number:>width$} {mark}|");
        match highlighter {
            Some(_) => out.push_str(&format!("{} {line}{}\n", dim(&gutter), colors::RESET)),
            None => out.push_str(&format!("{gutter} {line}\n")),
        }
    }
    out
}

/// Prints record search results as a table.
pub fn output_record_results(
    raw: &str,
    outcome: &SearchOutcome<ScoredRecord>,
    load_failures: &[RecordLoadFailure],
    output: &OutputArgs,
) -> ExitCode {
    report_query_error(outcome);

    if output.json {
        let json_output = JsonRecordOutput {
            query: raw,
            terms: outcome.terms(),
            results: &outcome.results,
            failures: &outcome.failures,
            load_failures,
        };
        return print_json(&json_output);
    }

    for failure in load_failures {
        eprintln!(
            "warning: skipped entry {}: {}",
            failure.index, failure.message
        );
    }
    for failure in &outcome.failures {
        eprintln!("warning: skipped {}: {}", failure.source, failure.reason);
    }

    if outcome.is_empty() {
        println!("No results.");
        return ExitCode::SUCCESS;
    }

    println!("{}", record_table(&outcome.results));
    ExitCode::SUCCESS
}

/// Builds the ranked records table.
fn record_table(results: &[RankedResult<ScoredRecord>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Repository", "Score", "Stars", "Forks", "Why"]);
    for (i, result) in results.iter().enumerate() {
        let scored = &result.item;
        table.add_row(vec![
            Cell::new((i + 1).to_string()),
            Cell::new(scored.id()),
            Cell::new(format!("{:.2}", result.score)),
            Cell::new(scored.record.stars.to_string()),
            Cell::new(scored.record.forks.to_string()),
            Cell::new(&scored.justification),
        ]);
    }
    table
}
