//! End-to-end CLI tests for tweetcast.
//!
//! These tests run the actual binary against archives in a temporary
//! directory and check the files and messages it produces.
//!
//! # Test Categories
//!
//! - **process**: Posts file generation, formats, flags, date filters
//! - **prompt**: Prompt generation and its validation errors
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const ARCHIVE: &str = r#"window.YTD.tweets.part0 = [
  {"tweet": {"id": "1", "full_text": "First post\nwith a break", "created_at": "Mon Mar 02 08:15:00 +0000 2015", "favorite_count": "1", "retweet_count": "0"}},
  {"tweet": {"id": "2", "full_text": "RT @friend: their post", "created_at": "Thu Aug 24 11:00:00 +0000 2023", "favorite_count": "0", "retweet_count": "0"}},
  {"tweet": {"id": "3", "full_text": "Draft", "created_at": "Sun Sep 10 18:30:00 +0000 2023", "favorite_count": "2", "retweet_count": "0",
    "edit_info": {"initial": {"editTweetIds": ["3", "4"]}}}},
  {"tweet": {"id": "4", "full_text": "Final \"edit\"", "created_at": "Sun Sep 10 18:30:00 +0000 2023", "favorite_count": "40", "retweet_count": "7",
    "edit_info": {"edit": {"initialTweetId": "3", "editControlInitial": {"editTweetIds": ["3", "4"]}}}}}
];"#;

const EXPECTED_CSV: &str = "full_text,created_at,favorite_count,retweet_count
\"First post with a break\",\"Mon Mar 02 08:15:00 +0000 2015\",1,0
\"Final \"\"edit\"\"\",\"Sun Sep 10 18:30:00 +0000 2023\",40,7";

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("tweets.js"), ARCHIVE).unwrap();
    fs::write(dir.path().join("no_array.js"), "window.YTD.tweets.part0 = nothing").unwrap();
    fs::write(
        dir.path().join("broken.js"),
        "window.YTD.tweets.part0 = [{\"tweet\": ]",
    )
    .unwrap();
    fs::write(dir.path().join("empty.js"), "window.YTD.tweets.part0 = []").unwrap();
    dir
}

fn tweetcast() -> Command {
    Command::cargo_bin("tweetcast").unwrap()
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help() {
    tweetcast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("prompt"));
}

#[test]
fn test_version() {
    tweetcast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_fails() {
    tweetcast().assert().failure();
}

// ============================================================================
// process
// ============================================================================

#[test]
fn test_process_writes_posts_file() {
    let dir = setup_fixtures();
    let output = dir.path().join("out.txt");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"))
        .stdout(predicate::str::contains("Retweets:     1"))
        .stdout(predicate::str::contains("Old edits:    1"))
        .stdout(predicate::str::contains("Final:        2 posts"));

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED_CSV);
}

#[test]
fn test_process_default_output_name() {
    let dir = setup_fixtures();

    tweetcast()
        .current_dir(dir.path())
        .args(["process", "tweets.js"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("posts.txt")).unwrap(),
        EXPECTED_CSV
    );
}

#[test]
fn test_process_keep_retweets_and_revisions() {
    let dir = setup_fixtures();
    let output = dir.path().join("all.txt");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .arg("-o")
        .arg(&output)
        .args(["--keep-retweets", "--all-revisions"])
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("RT @friend"));
    assert!(csv.contains("\"Draft\""));
}

#[test]
fn test_process_date_filter() {
    let dir = setup_fixtures();
    let output = dir.path().join("recent.txt");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .arg("-o")
        .arg(&output)
        .args(["--after", "2020-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 posts inside the date range"));

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Final"));
    assert!(!csv.contains("First post"));
}

#[test]
fn test_process_invalid_date() {
    let dir = setup_fixtures();

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .args(["--before", "10/09/2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_process_jsonl() {
    let dir = setup_fixtures();
    let output = dir.path().join("posts.jsonl");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .arg("-o")
        .arg(&output)
        .args(["-f", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format:  JSONL"));

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["full_text"], "First post\nwith a break");
}

#[test]
fn test_process_json() {
    let dir = setup_fixtures();
    let output = dir.path().join("posts.json");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .arg("-o")
        .arg(&output)
        .args(["--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_process_preview() {
    let dir = setup_fixtures();

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .arg("-o")
        .arg(dir.path().join("out.txt"))
        .arg("--preview")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "full_text,created_at,favorite_count,retweet_count\n\"First post with a break\"",
        ))
        .stdout(predicate::str::contains("..."));
}

#[test]
fn test_process_empty_archive() {
    let dir = setup_fixtures();
    let output = dir.path().join("out.txt");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("empty.js"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final:        0 posts"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "full_text,created_at,favorite_count,retweet_count"
    );
}

// ============================================================================
// process: errors
// ============================================================================

#[test]
fn test_process_missing_file() {
    let dir = setup_fixtures();

    tweetcast()
        .arg("process")
        .arg(dir.path().join("missing.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_process_no_array() {
    let dir = setup_fixtures();
    let output = dir.path().join("out.txt");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("no_array.js"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("FormatError"));

    assert!(!output.exists());
}

#[test]
fn test_process_invalid_json() {
    let dir = setup_fixtures();
    let output = dir.path().join("out.txt");

    tweetcast()
        .arg("process")
        .arg(dir.path().join("broken.js"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ParseError"));

    assert!(!output.exists());
}

#[test]
fn test_process_unknown_format() {
    let dir = setup_fixtures();

    tweetcast()
        .arg("process")
        .arg(dir.path().join("tweets.js"))
        .args(["-f", "xml"])
        .assert()
        .failure();
}

// ============================================================================
// prompt
// ============================================================================

#[test]
fn test_prompt_success() {
    tweetcast()
        .args(["prompt", "--intro", "I'm a backend engineer.", "--topic", "Rust at work"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "I'm a backend engineer. I am sharing my X/twitter feed.",
        ))
        .stdout(predicate::str::contains("today's episode is: Rust at work"))
        .stderr(predicate::str::contains("characters remaining"));
}

#[test]
fn test_prompt_missing_intro() {
    tweetcast()
        .args(["prompt", "--intro", "", "--topic", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing information: please provide an introduction",
        ));
}

#[test]
fn test_prompt_missing_topic() {
    tweetcast()
        .args(["prompt", "--intro", "me", "--topic", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please provide a topic"));
}

#[test]
fn test_prompt_too_long() {
    tweetcast()
        .args(["prompt", "--intro", "me", "--topic", "Rust", "--max-chars", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many characters"))
        .stderr(predicate::str::contains("limit: 10"));
}

#[test]
fn test_prompt_requires_arguments() {
    tweetcast().arg("prompt").assert().failure();
}
