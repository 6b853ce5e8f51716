//! Implementation of `sift search`.

use std::process::ExitCode;

use sift_document::Document;
use sift_engine::ItemFailure;
use tracing::debug;

use super::shared::{SearchParamsOverrides, print_explain};
use crate::cli::{args::SearchCommand, context::CommandContext, output::output_text_results};

/// Ranks excerpts from the given files against a query.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let overrides = SearchParamsOverrides {
        limit: cmd.limit,
        mode: cmd.mode,
        window_size: cmd.window_size,
        max_gap: cmd.max_gap,
        context: cmd.context,
        matched_only: false,
        sequential: cmd.sequential,
    };
    let searcher = overrides.build_searcher(&ctx.config);

    if cmd.explain.explain {
        print_explain(&searcher, &cmd.query, false);
        return ExitCode::SUCCESS;
    }

    let mut documents = Vec::with_capacity(cmd.files.len());
    let mut read_failures = Vec::new();
    for path in &cmd.files {
        match Document::read(path) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                if !cmd.output.json {
                    eprintln!("warning: {e}");
                }
                read_failures.push(ItemFailure {
                    source: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    debug!(
        read = documents.len(),
        unreadable = read_failures.len(),
        "loaded documents"
    );

    if documents.is_empty() && !read_failures.is_empty() {
        eprintln!("error: none of the given files could be read");
        return ExitCode::FAILURE;
    }

    let outcome = searcher.search_text(&cmd.query, &documents);
    output_text_results(&cmd.query, &outcome, &read_failures, &cmd.output)
}
