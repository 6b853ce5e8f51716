//! CLI integration tests for sift commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a sift command.
fn sift() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sift").unwrap()
}

/// Helper to run `sift` with HOME isolated to the provided directory.
fn sift_with_home(home: &Path) -> Command {
    let mut cmd = sift();
    cmd.env("HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Runs a command expected to succeed and parses its stdout as JSON.
fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

/// Writes the three-line `add.js` fixture.
fn write_add_js(dir: &Path) {
    fs::write(
        dir.join("add.js"),
        "function add(a,b) {\n  return a + b;\n}\n",
    )
    .unwrap();
}

/// Writes a 25-line file with query matches on lines 2 and 20.
fn write_spread_file(dir: &Path) {
    let lines: Vec<String> = (1..=25)
        .map(|n| match n {
            2 => "the parser starts here".to_string(),
            20 => "parser ends here".to_string(),
            _ => format!("filler line {n}"),
        })
        .collect();
    fs::write(dir.join("notes.txt"), lines.join("\n")).unwrap();
}

/// Writes a records file with one relevant, one popular, and one malformed entry.
fn write_repos_json(dir: &Path) {
    fs::write(
        dir.join("repos.json"),
        r#"[
            {"id": "serde-rs/json", "description": "Strongly typed JSON library",
             "topics": ["json", "serde"], "stars": 4000, "forks": 500},
            {"id": "other/thing", "description": "Unrelated tool",
             "stars": 100000, "forks": 9000},
            {"description": "no id"}
        ]"#,
    )
    .unwrap();
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let config_path = dir.path().join(".sift.toml");
        assert!(config_path.exists());

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# [search]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".sift.toml"), "existing").unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        let config_path = dir.path().join(".sift.toml");
        fs::write(&config_path, "existing").unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert_ne!(contents, "existing");
    }

    #[test]
    fn global_writes_to_home() {
        let home = temp_dir();
        let project = temp_dir();

        sift_with_home(home.path())
            .current_dir(project.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".sift.toml").exists());
        assert!(!project.path().join(".sift.toml").exists());
    }

    #[test]
    fn init_works_with_invalid_existing_config() {
        let dir = temp_dir();
        fs::write(dir.path().join(".sift.toml"), "[[not valid").unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();
    }
}

mod search {
    use super::*;

    #[test]
    fn window_mode_prints_best_excerpt() {
        let dir = temp_dir();
        write_add_js(dir.path());

        let output = sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "add function", "add.js"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("add.js:1-3"), "{stdout}");
        assert!(stdout.contains("return a + b;"), "{stdout}");
    }

    #[test]
    fn json_output_has_ranked_window() {
        let dir = temp_dir();
        write_add_js(dir.path());

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["search", "add function", "add.js", "--json"]),
        );
        assert_eq!(json["query"], "add function");
        assert_eq!(json["terms"], serde_json::json!(["add", "function"]));
        let first = &json["results"][0];
        assert_eq!(first["source"], "add.js");
        assert_eq!(first["item"]["kind"], "window");
        assert_eq!(first["item"]["line_start"], 1);
        assert_eq!(first["item"]["line_end"], 3);
        assert!(first["score"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn grouped_mode_returns_each_cluster() {
        let dir = temp_dir();
        write_spread_file(dir.path());

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["search", "parser", "notes.txt", "--mode", "grouped", "--json"]),
        );
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        let mut ranges: Vec<(u64, u64)> = results
            .iter()
            .map(|r| {
                assert_eq!(r["item"]["kind"], "snippet");
                (
                    r["item"]["line_start"].as_u64().unwrap(),
                    r["item"]["line_end"].as_u64().unwrap(),
                )
            })
            .collect();
        ranges.sort_unstable();
        assert_eq!(ranges, [(1, 4), (18, 22)]);
    }

    #[test]
    fn grouped_text_marks_matched_lines() {
        let dir = temp_dir();
        write_spread_file(dir.path());

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "parser", "notes.txt", "-m", "grouped", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("20 >| parser ends here"));
    }

    #[test]
    fn limit_truncates_results() {
        let dir = temp_dir();
        write_spread_file(dir.path());

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["search", "parser", "notes.txt", "-m", "grouped", "-n", "1", "--json"]),
        );
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn config_mode_is_used_when_flag_is_absent() {
        let dir = temp_dir();
        write_spread_file(dir.path());
        fs::write(dir.path().join(".sift.toml"), "[search]\nmode = \"grouped\"\n").unwrap();

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["search", "parser", "notes.txt", "--json"]),
        );
        assert_eq!(json["results"][0]["item"]["kind"], "snippet");
    }

    #[test]
    fn missing_file_warns_and_continues() {
        let dir = temp_dir();
        write_add_js(dir.path());

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "add function", "add.js", "missing.js"])
            .assert()
            .success()
            .stderr(predicate::str::contains("missing.js"))
            .stdout(predicate::str::contains("add.js"));
    }

    #[test]
    fn missing_file_is_reported_in_json() {
        let dir = temp_dir();
        write_add_js(dir.path());

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["search", "add function", "add.js", "missing.js", "--json"]),
        );
        assert_eq!(json["failures"][0]["source"], "missing.js");
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn fails_when_no_file_is_readable() {
        let dir = temp_dir();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "anything", "missing.js"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could be read"));
    }

    #[test]
    fn stopword_query_finds_nothing() {
        let dir = temp_dir();
        write_add_js(dir.path());

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "the and of", "add.js"])
            .assert()
            .success()
            .stderr(predicate::str::contains("warning:"))
            .stdout(predicate::str::contains("No results."));
    }

    #[test]
    fn explain_shows_terms_without_searching() {
        let dir = temp_dir();

        let output = sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "the add function", "missing.js", "--explain"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("Terms:"));
        assert!(stdout.contains("   add\n"));
        assert!(stdout.contains("   function\n"));
        assert!(stdout.contains("mode: window"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = temp_dir();
        write_add_js(dir.path());
        fs::write(dir.path().join(".sift.toml"), "[search]\nlimit = \"many\"\n").unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["search", "add", "add.js"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }

    #[test]
    fn requires_at_least_one_file() {
        sift().args(["search", "query"]).assert().failure();
    }
}

mod records {
    use super::*;

    #[test]
    fn table_ranks_relevant_record_first() {
        let dir = temp_dir();
        write_repos_json(dir.path());

        let output = sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["records", "json library", "repos.json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("skipped entry 2"))
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8_lossy(&output);
        let relevant = stdout.find("serde-rs/json").unwrap();
        let popular = stdout.find("other/thing").unwrap();
        assert!(relevant < popular, "{stdout}");
    }

    #[test]
    fn json_output_includes_justification_and_failures() {
        let dir = temp_dir();
        write_repos_json(dir.path());

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["records", "json library", "repos.json", "--json"]),
        );
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["source"], "serde-rs/json");
        assert_eq!(results[0]["item"]["verbatim"], true);
        assert!(
            results[0]["item"]["justification"]
                .as_str()
                .unwrap()
                .contains("json")
        );
        assert_eq!(json["load_failures"][0]["index"], 2);
    }

    #[test]
    fn matched_only_drops_popularity_only_records() {
        let dir = temp_dir();
        write_repos_json(dir.path());

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["records", "json library", "repos.json", "--matched-only", "--json"]),
        );
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["source"], "serde-rs/json");
    }

    #[test]
    fn yaml_records_are_supported() {
        let dir = temp_dir();
        fs::write(
            dir.path().join("repos.yaml"),
            "- id: a/cli\n  description: command line parser\n  topics: [cli]\n",
        )
        .unwrap();

        let json = json_stdout(
            sift_with_home(dir.path())
                .current_dir(dir.path())
                .args(["records", "parser", "repos.yaml", "--json"]),
        );
        assert_eq!(json["results"][0]["source"], "a/cli");
    }

    #[test]
    fn missing_file_fails() {
        let dir = temp_dir();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["records", "json", "missing.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read records file"));
    }

    #[test]
    fn wrong_shape_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join("repos.json"), r#"{"repos": []}"#).unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .args(["records", "json", "repos.json"])
            .assert()
            .failure();
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_defaults() {
        let dir = temp_dir();

        let output = sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("config")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("[search]"), "{stdout}");
        assert!(stdout.contains("limit = 10"), "{stdout}");
        assert!(stdout.contains("[records]"), "{stdout}");
    }

    #[test]
    fn reflects_local_overrides() {
        let dir = temp_dir();
        fs::write(dir.path().join(".sift.toml"), "[search]\nlimit = 4\n").unwrap();

        let output = sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("config")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("limit = 4"), "{stdout}");
    }

    #[test]
    fn closer_config_wins_over_global() {
        let home = temp_dir();
        let project = home.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(home.path().join(".sift.toml"), "[window]\nsize = 7\n").unwrap();
        fs::write(project.join(".sift.toml"), "[window]\nsize = 12\n").unwrap();

        let output = sift_with_home(home.path())
            .current_dir(&project)
            .arg("config")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("size = 12"), "{stdout}");
    }
}

mod check {
    use super::*;

    #[test]
    fn no_config_succeeds() {
        let dir = temp_dir();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found"));
    }

    #[test]
    fn valid_config_succeeds() {
        let dir = temp_dir();
        fs::write(dir.path().join(".sift.toml"), "[search]\nlimit = 5\n").unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn warnings_fail() {
        let dir = temp_dir();
        fs::write(dir.path().join(".sift.toml"), "[window]\nsize = 0\n").unwrap();

        let output = sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("window size is 0"), "{stdout}");
    }

    #[test]
    fn parse_errors_fail() {
        let dir = temp_dir();
        fs::write(dir.path().join(".sift.toml"), "[unknown]\nkey = 1\n").unwrap();

        sift_with_home(dir.path())
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }
}

mod help {
    use super::*;

    #[test]
    fn top_level_help_lists_commands() {
        sift()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("search"))
            .stdout(predicate::str::contains("records"));
    }

    #[test]
    fn search_help_explains_query_analysis() {
        sift()
            .args(["search", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("QUERY ANALYSIS"));
    }
}
