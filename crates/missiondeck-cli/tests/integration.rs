#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn deck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deck").unwrap();
    cmd.current_dir(dir.path()).env("DECK_ROOT", dir.path());
    cmd
}

fn init_deck(dir: &TempDir) {
    deck(dir).arg("init").assert().success();
}

fn write_batch(dir: &TempDir, name: &str, titles: &[&str]) -> PathBuf {
    let missions: Vec<serde_json::Value> = titles
        .iter()
        .map(|t| {
            serde_json::json!({
                "title": t,
                "description": format!("Build {t} from scratch."),
                "time_estimate": "30-45 minutes",
                "difficulty": "beginner",
                "tools": ["Node.js"],
                "steps": [{
                    "title": "Set up",
                    "description": "Create the project folder.",
                    "commands": ["mkdir demo"],
                    "checklist": ["Folder exists"]
                }],
                "success_criteria": ["It runs end to end"]
            })
        })
        .collect();
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(&missions).unwrap()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// deck init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_and_packs_dir() {
    let dir = TempDir::new().unwrap();
    deck(&dir).arg("init").assert().success();

    assert!(dir.path().join("deck.yaml").exists());
    assert!(dir.path().join("packs").is_dir());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    deck(&dir).arg("init").assert().success();
    deck(&dir).arg("init").assert().success();
}

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();
    deck(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

// ---------------------------------------------------------------------------
// deck add / list / show
// ---------------------------------------------------------------------------

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let batch = write_batch(&dir, "batch.json", &["Tiny KV Store", "RSS Digest"]);

    deck(&dir)
        .args(["add", "--from"])
        .arg(&batch)
        .args(["--date", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored 2025-01-15 with 2 missions."));

    deck(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-15"))
        .stdout(predicate::str::contains("Tiny KV Store"));
}

#[test]
fn add_merges_and_renumbers_on_second_batch() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let first = write_batch(&dir, "first.json", &["Alpha", "Beta"]);
    let second = write_batch(&dir, "second.json", &["Gamma"]);

    deck(&dir)
        .args(["add", "--from"])
        .arg(&first)
        .args(["--date", "2025-01-15"])
        .assert()
        .success();

    deck(&dir)
        .args(["add", "--from"])
        .arg(&second)
        .args(["--date", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now 3 total"));

    deck(&dir)
        .args(["show", "2025-01-15", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Mission 3: Gamma"));

    deck(&dir)
        .args(["validate", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));
}

#[test]
fn add_rejects_empty_batch() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    deck(&dir)
        .args(["add", "--from"])
        .arg(&path)
        .args(["--date", "2025-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn add_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let batch = write_batch(&dir, "batch.json", &["Alpha"]);

    deck(&dir)
        .args(["add", "--from"])
        .arg(&batch)
        .args(["--date", "January 15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn add_json_output() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let batch = write_batch(&dir, "batch.json", &["Alpha"]);

    let output = deck(&dir)
        .args(["add", "--from"])
        .arg(&batch)
        .args(["--date", "2025-01-15", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["date"], "2025-01-15");
    assert_eq!(json["merged"], false);
    assert_eq!(json["total_missions"], 1);
}

#[test]
fn show_summary_and_json() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let batch = write_batch(&dir, "batch.json", &["Tiny KV Store"]);
    deck(&dir)
        .args(["add", "--from"])
        .arg(&batch)
        .args(["--date", "2025-01-15"])
        .assert()
        .success();

    deck(&dir)
        .args(["show", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Tiny KV Store"))
        .stdout(predicate::str::contains("2025-01-15-tiny-kv-store"));

    let output = deck(&dir)
        .args(["show", "2025-01-15", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["date"], "2025-01-15");
    assert_eq!(json["missions"][0]["title"], "Tiny KV Store");
}

#[test]
fn show_missing_pack_fails() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);

    deck(&dir)
        .args(["show", "2025-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pack for 2025-01-15"));
}

#[test]
fn latest_shows_newest_pack() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let old = write_batch(&dir, "old.json", &["Old Mission"]);
    let new = write_batch(&dir, "new.json", &["New Mission"]);

    deck(&dir)
        .args(["add", "--from"])
        .arg(&old)
        .args(["--date", "2025-01-15"])
        .assert()
        .success();
    deck(&dir)
        .args(["add", "--from"])
        .arg(&new)
        .args(["--date", "2025-06-01"])
        .assert()
        .success();

    deck(&dir)
        .arg("latest")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01"))
        .stdout(predicate::str::contains("New Mission"));
}

// ---------------------------------------------------------------------------
// deck export
// ---------------------------------------------------------------------------

#[test]
fn export_mission_by_slug() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let batch = write_batch(&dir, "batch.json", &["Build an MCP Server!!", "Other"]);
    deck(&dir)
        .args(["add", "--from"])
        .arg(&batch)
        .args(["--date", "2025-01-15"])
        .assert()
        .success();

    deck(&dir)
        .args(["export", "2025-01-15-build-an-mcp-server"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Mission 1: Build an MCP Server!!"))
        .stdout(predicate::str::contains("#### Step 1: Set up"));
}

#[test]
fn export_rejects_malformed_slug() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);

    deck(&dir)
        .args(["export", "not-a-real-slug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mission slug"));
}

#[test]
fn export_unknown_mission_fails() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let batch = write_batch(&dir, "batch.json", &["Alpha"]);
    deck(&dir)
        .args(["add", "--from"])
        .arg(&batch)
        .args(["--date", "2025-01-15"])
        .assert()
        .success();

    deck(&dir)
        .args(["export", "2025-01-15-no-such-mission"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no mission"));
}

// ---------------------------------------------------------------------------
// deck validate
// ---------------------------------------------------------------------------

#[test]
fn validate_reports_numbering_errors() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    std::fs::write(
        dir.path().join("packs/2025-01-15.md"),
        "# 🎯 Broken Missions - 2025-01-15\n\n---\n\n## Mission 2: Skipped Ahead\n\nBody.\n\n---\n",
    )
    .unwrap();

    deck(&dir)
        .args(["validate", "2025-01-15"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("numbered 2 (expected 1)"))
        .stderr(predicate::str::contains("failed validation"));
}

// ---------------------------------------------------------------------------
// deck terms
// ---------------------------------------------------------------------------

#[test]
fn terms_lists_glossary_hits() {
    let dir = TempDir::new().unwrap();
    init_deck(&dir);
    let missions = serde_json::json!([{
        "title": "Local Search Bot",
        "description": "Stand up an MCP server backed by SQLite.",
        "steps": [{ "title": "Go", "description": "Run it.", "commands": [], "checklist": [] }]
    }]);
    let path = dir.path().join("batch.json");
    std::fs::write(&path, serde_json::to_string(&missions).unwrap()).unwrap();
    deck(&dir)
        .args(["add", "--from"])
        .arg(&path)
        .args(["--date", "2025-01-15"])
        .assert()
        .success();

    deck(&dir)
        .args(["terms", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP"))
        .stdout(predicate::str::contains("SQLite"));
}
