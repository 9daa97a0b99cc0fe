//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command in `home` and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ascension-cli"))
        .args(args)
        .env("ASCENSION_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn quest_ids(home: &Path) -> Vec<String> {
    let (stdout, _, code) = run_cli(home, &["status", "--json"]);
    assert_eq!(code, 0, "status --json failed");
    let state: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON state");
    state["quests"]
        .as_array()
        .expect("quests array")
        .iter()
        .map(|q| q["id"].as_str().expect("quest id").to_string())
        .collect()
}

#[test]
fn test_default_command_is_morning_briefing() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &[]);
    assert_eq!(code, 0);
    assert!(stdout.contains("DAWN REPORT"));
    assert!(stdout.contains("TODAY'S ACTIVE MISSIONS"));
    assert!(home.path().join("game_state.json").exists());
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_status_json_is_the_save_document() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["status", "--json"]);
    assert_eq!(code, 0);
    let state: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(state["player"]["name"], "Houssam");
    assert_eq!(state["player"]["level"], 1);
    assert_eq!(state["quests"].as_array().unwrap().len(), 6);
}

#[test]
fn test_status_overview() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ASCENSION STATUS"));
    assert!(stdout.contains("XP in reserve: 0 / next threshold 120"));
}

#[test]
fn test_complete_by_prefix() {
    let home = TempDir::new().unwrap();
    let ids = quest_ids(home.path());
    let (stdout, _, code) = run_cli(home.path(), &["complete", &ids[0][..6]]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Mission Cleared: Pray all 5 obligatory prayers"));
    assert!(stdout.contains("XP +40"));

    let (again, _, code) = run_cli(home.path(), &["complete", &ids[0]]);
    assert_eq!(code, 0);
    assert!(again.contains("Quest already completed."));
}

#[test]
fn test_fail_escalates() {
    let home = TempDir::new().unwrap();
    let ids = quest_ids(home.path());
    let (stdout, _, code) = run_cli(home.path(), &["fail", &ids[3]]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Mission Failed"));
    assert!(stdout.contains("New difficulty: Easy, XP: 40."));
}

#[test]
fn test_unknown_quest_is_reported() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["complete", "zzzzzz"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Quest not found."));
}

#[test]
fn test_plan_lists_and_schedules() {
    let home = TempDir::new().unwrap();
    let (listing, _, code) = run_cli(home.path(), &["plan"]);
    assert_eq!(code, 0);
    assert!(listing.contains("Available Quest Blueprints:"));

    let (stdout, _, code) = run_cli(home.path(), &["plan", "0", "--due", "2"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Planned: Shadow Coding Drill"));
    assert_eq!(quest_ids(home.path()).len(), 7);

    let (bad, _, _) = run_cli(home.path(), &["plan", "9"]);
    assert!(bad.contains("Invalid template selection."));
}

#[test]
fn test_plan_with_negative_due_is_overdue() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["plan", "1", "--due", "-1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Planned:"));

    let (briefing, _, _) = run_cli(home.path(), &["morning"]);
    assert!(briefing.contains("URGENT QUESTS FROM YESTERDAY"));
}

#[test]
fn test_templates() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["templates"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[4]"));
}

#[test]
fn test_advance_rearms_open_quests() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["advance"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("MIDNIGHT ROLLOVER"));
    assert!(stdout.contains("returned angrier"));
    assert!(stdout.contains("!!"));
}

#[test]
fn test_config_set_and_get() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "player.name", "Amina"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "player.name"]);
    assert_eq!(stdout.trim(), "Amina");

    let (path, _, _) = run_cli(home.path(), &["config", "path"]);
    assert!(path.trim().ends_with("config.toml"));
}

#[test]
fn test_config_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "nope.key"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}
