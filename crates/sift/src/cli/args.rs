//! Clap argument definitions for the `sift` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use sift_config::TextMode;

/// Parses a text excerpt mode from a string.
fn parse_mode(s: &str) -> Result<TextMode, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Rank and excerpt source files and repository records against a query")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colors and syntax highlighting
    #[arg(long)]
    pub no_color: bool,
}

/// Shared explain/debug flag.
#[derive(Args, Debug, Clone, Default)]
pub struct ExplainArgs {
    /// Show the analyzed query terms and effective parameters without searching
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `sift search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Free-text query
    pub query: String,

    /// Files to search (directories are not traversed)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Excerpt mode: window (best excerpt per file) or grouped (every match cluster) [default: window]
    #[arg(short = 'm', long, value_parser = parse_mode)]
    pub mode: Option<TextMode>,

    /// Lines per scoring window [default: 10]
    #[arg(short = 'w', long)]
    pub window_size: Option<usize>,

    /// Maximum line distance between matches in one snippet [default: 3]
    #[arg(long)]
    pub max_gap: Option<usize>,

    /// Context lines around each snippet [default: 2]
    #[arg(short = 'C', long)]
    pub context: Option<usize>,

    /// Maximum results to print [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Score files on a single thread
    #[arg(long)]
    pub sequential: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    #[command(flatten)]
    /// Explain/debug flags.
    pub explain: ExplainArgs,
}

/// Arguments for `sift records`.
#[derive(Args, Debug, Clone)]
pub struct RecordsCommand {
    /// Free-text query
    pub query: String,

    /// JSON or YAML file with a list of records or a search response with `items`
    pub file: PathBuf,

    /// Maximum results to print [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Hide records whose description and topics share nothing with the query
    #[arg(long)]
    pub matched_only: bool,

    /// Score records on a single thread
    #[arg(long)]
    pub sequential: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    #[command(flatten)]
    /// Explain/debug flags.
    pub explain: ExplainArgs,
}

/// Arguments for `sift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.sift.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank excerpts of source files
    #[command(after_help = "\
QUERY ANALYSIS:
  The query is lowercased, punctuation is removed, and words shorter than three
  characters or common function words (the, and, with, ...) are dropped. A query
  with nothing left matches nothing.

EXAMPLES:
  sift search 'add function' src/math.js src/util.js
  sift search 'retry http client' --mode grouped src/net/*.rs
  sift search 'parse config' -w 20 -n 3 --json src/*.rs")]
    Search(SearchCommand),

    /// Rank repository metadata records
    #[command(after_help = "\
SCORING:
  +2 per query term in the description, +10 if the description contains the
  whole query, +3 per query term found in a topic, plus 0.5*log10(stars+1) and
  0.3*log10(forks+1). Weights are configurable in [records].

EXAMPLES:
  sift records 'json parser' repos.json
  sift records 'async runtime' search-response.json --matched-only -n 5")]
    Records(RecordsCommand),

    /// Initialize sift configuration in the current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and report warnings
    Check,
}

impl Commands {
    /// Returns true if the command needs the merged configuration loaded up front.
    pub fn needs_config(&self) -> bool {
        matches!(self, Self::Search(_) | Self::Records(_) | Self::Config)
    }
}

/// Parses CLI arguments, printing compact help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints top-level help listing each subcommand on one line.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: sift [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }
    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -v, --verbose...  Increase log verbosity");
    println!("  -h, --help        Print help");
}
