//! Implementation of `sift check`.

use std::process::ExitCode;

use sift_config::{Config, ConfigWarning, discover_config_files, is_global_config};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files and validation warnings.
///
/// Exits with failure when a config file cannot be parsed or any warning is found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found; using defaults."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("sift init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        let scope = if is_global_config(path) {
            "global"
        } else {
            "local"
        };
        println!("   {} {}", path.display(), dim(&format!("({scope})")));
    }
    println!();

    let config = match Config::load_from_files(&config_files) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoMarkers | ConfigWarning::EmptyMarker => {
                println!(
                    "{}",
                    dim("Hint: set [window] markers = [\"function\", \"class\"]")
                );
            }
            ConfigWarning::NonPositiveDivisor { section, .. } => {
                println!("{}", dim(&format!("Hint: set [{section}] divisor above 0")));
            }
            _ => {}
        }
    }
}
