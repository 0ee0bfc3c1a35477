//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Abbreviate Command
// =============================================================================

/// Dictionary-free backends so results do not depend on a lexicon.
const SCRIPT_BACKENDS: [&str; 4] = ["--splitter", "script", "--validator", "script"];

#[test]
fn abbreviate_short_phrase_is_returned_as_is() {
    cmd()
        .args(["abbreviate", "短大"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success()
        .stdout(predicate::str::contains("短大"));
}

#[test]
fn abbreviate_json_lists_reports() {
    let output = cmd()
        .args(["--json", "abbreviate", "短期大学", "--min-mora", "0"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("abbreviate --json should output valid JSON");

    let report = &json[0];
    assert_eq!(report["phrase"], "短期大学");
    assert_eq!(report["words"], serde_json::json!(["短期大学"]));
    assert_eq!(report["raw_candidates"], 7);
    assert_eq!(
        report["abbreviations"],
        serde_json::json!(["短期", "期大", "大学"])
    );
}

#[test]
fn abbreviate_readingless_candidates_fail_mora_check() {
    // script runs give kanji no reading, so the default minimum rejects them
    cmd()
        .args(["abbreviate", "短期大学"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success()
        .stdout(predicate::str::contains("短期大学"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn abbreviate_without_phrases_uses_samples() {
    let output = cmd()
        .args(["--json", "abbreviate"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let phrases: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|report| report["phrase"].as_str().unwrap())
        .collect();
    assert_eq!(phrases.len(), 6);
    assert!(phrases.contains(&"関西国際空港"));
}

#[test]
fn abbreviate_reads_phrases_from_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "短大\n\nアニメ\n").unwrap();

    let output = cmd()
        .args(["--json", "abbreviate", "--file", tmp.path().to_str().unwrap()])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["phrase"], "アニメ");
}

#[test]
fn abbreviate_missing_file_fails() {
    cmd()
        .args(["abbreviate", "--file", "/nonexistent/phrases.txt"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn abbreviate_inverted_bounds_fail() {
    cmd()
        .args(["abbreviate", "短期大学", "--min-filter", "4", "--max-filter", "2"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter range"));
}

#[test]
fn abbreviate_with_embedded_dictionary() {
    let output = cmd()
        .args(["--json", "abbreviate", "関西国際空港"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let report = &json[0];

    let words: Vec<&str> = report["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|word| word.as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["関西", "国際", "空港"]);

    // Each word offers its 1- and 2-char windows; later words may also be omitted.
    let expected_total: usize = words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let len = word.chars().count();
            let windows = len + len.saturating_sub(1);
            if index == 0 { windows } else { windows + 1 }
        })
        .product();
    assert_eq!(expected_total, 48);
    assert_eq!(report["raw_candidates"], expected_total);

    let length_filtered = report["length_filtered"].as_u64().unwrap();
    assert!(length_filtered > 0 && length_filtered < 48);
    let abbreviations = report["abbreviations"].as_array().unwrap();
    assert!(abbreviations.len() as u64 <= length_filtered);
    for abbreviation in abbreviations {
        let len = abbreviation.as_str().unwrap().chars().count();
        assert!((2..=4).contains(&len), "{abbreviation} outside length window");
    }
}

// =============================================================================
// Tokenize Command
// =============================================================================

#[test]
fn tokenize_json_lists_tokens() {
    let output = cmd()
        .args(["--json", "tokenize", "逃げるは恥", "--backend", "script"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tokens = json.as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1]["surface"], "げるは");
    assert_eq!(tokens[1]["reading"], "ゲルハ");
}

#[test]
fn tokenize_with_embedded_dictionary_covers_phrase() {
    let output = cmd()
        .args(["--json", "tokenize", "関西国際空港"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let surface: String = json
        .as_array()
        .unwrap()
        .iter()
        .map(|token| token["surface"].as_str().unwrap())
        .collect();
    assert_eq!(surface, "関西国際空港");
}

// =============================================================================
// Similarity Command
// =============================================================================

#[test]
fn similarity_json_reports_metrics() {
    let output = cmd()
        .args(["--json", "similarity", "逃げ恥", "逃げるは恥"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["edit_distance"], 2);
    assert_eq!(json["sequence_ratio"], 0.75);
    assert_eq!(json["jaccard"], 0.5);
}

#[test]
fn similarity_text_output() {
    cmd()
        .args(["similarity", "猫", "犬"])
        .args(SCRIPT_BACKENDS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit distance"))
        .stdout(predicate::str::contains("Jaro-Winkler"));
}

#[test]
fn similarity_requires_two_phrases() {
    cmd()
        .args(["similarity", "猫"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
