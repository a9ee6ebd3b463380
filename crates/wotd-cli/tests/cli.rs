//! Binary-level tests for the `wotd` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn wotd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wotd").unwrap();
    cmd.env_clear()
        .current_dir(dir)
        .env("WOTD_DATA_DIR", dir.join("data"))
        .env("SOURCE_DIR", "demo")
        .env("WOTD_LOG_LEVEL", "error");
    cmd
}

fn with_site_env(cmd: &mut Command) -> &mut Command {
    cmd.env("SITE_URL", "https://words.example.com")
        .env("SITE_TITLE", "Test Words")
        .env("SITE_DESCRIPTION", "Words for tests")
        .env("SITE_ID", "test-words")
        .env("SITE_AUTHOR", "Tester")
}

fn seed(dir: &Path, date: &str, word: &str) {
    let year_dir = dir.join("data").join("demo").join("words").join(&date[..4]);
    fs::create_dir_all(&year_dir).unwrap();
    let entry = json!({
        "word": word,
        "date": date,
        "adapter": "wordnik",
        "data": [{"text": format!("Definition of {word}."), "partOfSpeech": "noun"}]
    });
    fs::write(year_dir.join(format!("{date}.json")), entry.to_string()).unwrap();
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("add-word"))
        .stdout(predicate::str::contains("ping-search-engines"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wotd "));
}

#[test]
fn test_build_without_required_env_exits_with_config_status() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .arg("build")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[E001]"))
        .stderr(predicate::str::contains("SITE_URL"));
}

#[test]
fn test_build_writes_outputs() {
    let dir = TempDir::new().unwrap();
    seed(dir.path(), "20240102", "hopeful");
    seed(dir.path(), "20240101", "level");

    with_site_env(&mut wotd(dir.path()))
        .args(["build", "--output", "dist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("for 2 words"));

    let dist = dir.path().join("dist");
    let health = fs::read_to_string(dist.join("health.txt")).unwrap();
    assert!(health.contains("word_count: 2"));
    assert!(health.contains("latest_word: hopeful"));
    assert!(dist.join("rss.xml").exists());
    assert!(dist.join("sitemap-index.xml").exists());

    let words: Value = serde_json::from_str(&fs::read_to_string(dist.join("words.json")).unwrap()).unwrap();
    assert_eq!(words.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_stats_json() {
    let dir = TempDir::new().unwrap();
    seed(dir.path(), "20240102", "hopeful");
    seed(dir.path(), "20240101", "level");

    let output = wotd(dir.path())
        .args(["stats", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["wordCount"], 2);
    assert_eq!(report["longestPalindrome"]["word"], "level");
    assert_eq!(report["streak"]["longestStreak"], 2);
}

#[test]
fn test_add_word_rejects_empty_word() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .args(["add-word", "  "])
        .env("WORDNIK_API_KEY", "unused")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("error[E004]"));
}

#[test]
fn test_add_word_rejects_future_date() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .args(["add-word", "tomorrow", "29991231"])
        .env("WORDNIK_API_KEY", "unused")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("future"));
}

#[test]
fn test_add_word_existing_word_conflicts() {
    let dir = TempDir::new().unwrap();
    seed(dir.path(), "20240101", "aback");

    wotd(dir.path())
        .args(["add-word", "Aback", "20240102"])
        .env("WORDNIK_API_KEY", "unused")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("already exists for 20240101"));
}

#[test]
fn test_add_word_without_api_key() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .args(["add-word", "serendipity", "20240101"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("WORDNIK_API_KEY"));
}

#[test]
fn test_migrate_preserve_case() {
    let dir = TempDir::new().unwrap();
    seed(dir.path(), "20240101", "Japan");
    seed(dir.path(), "20240102", "aback");

    wotd(dir.path())
        .arg("migrate-preserve-case")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 updated, 0 skipped, 0 failed (2 files)"));

    let path = dir.path().join("data/demo/words/2024/20240101.json");
    let stored: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(stored["preserveCase"], true);

    wotd(dir.path())
        .arg("migrate-preserve-case")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 updated, 2 skipped"));
}

#[test]
fn test_ping_dry_run() {
    let dir = TempDir::new().unwrap();
    wotd(dir.path())
        .args(["ping-search-engines", "--site-url", "https://words.example.com/", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ping-O-Matic"))
        .stdout(predicate::str::contains("sitemap-index.xml"));
}
