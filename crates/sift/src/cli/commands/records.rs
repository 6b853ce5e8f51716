//! Implementation of `sift records`.

use std::process::ExitCode;

use sift_document::load_records;

use super::shared::{SearchParamsOverrides, print_explain};
use crate::cli::{args::RecordsCommand, context::CommandContext, output::output_record_results};

/// Ranks records from a JSON or YAML file against a query.
pub fn run(ctx: &CommandContext, cmd: &RecordsCommand) -> ExitCode {
    let overrides = SearchParamsOverrides {
        limit: cmd.limit,
        matched_only: cmd.matched_only,
        sequential: cmd.sequential,
        ..Default::default()
    };
    let searcher = overrides.build_searcher(&ctx.config);

    if cmd.explain.explain {
        print_explain(&searcher, &cmd.query, true);
        return ExitCode::SUCCESS;
    }

    let path = ctx.cwd.join(&cmd.file);
    let batch = match load_records(&path) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = searcher.search_records(&cmd.query, &batch.records);
    output_record_results(&cmd.query, &outcome, &batch.failures, &cmd.output)
}
