//! Integration tests running the `standup` binary.
//!
//! Only the non-interactive `plan` command is exercised here; each test gets
//! its own `HOME` so no user configuration leaks in.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn standup_binary() -> String {
    env!("CARGO_BIN_EXE_standup").to_string()
}

fn standup(home: &Path, args: &[&str]) -> Output {
    Command::new(standup_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_STATE_HOME")
        .env_remove("RUST_LOG")
        .env_remove("STANDUP_END_TIME")
        .args(args)
        .output()
        .expect("failed to run standup")
}

fn write_config(dir: &Path, body: &str) -> String {
    let path = dir.join("team.toml");
    std::fs::write(&path, body).unwrap();
    path.display().to_string()
}

fn plan_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["plan", "--json"];
    full.extend_from_slice(args);
    let output = standup(home, &full);
    assert!(
        output.status.success(),
        "standup plan should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("plan output should be JSON")
}

#[test]
fn test_plan_uses_config_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        r#"
welcome_message = "Morning!"
primary_speakers = ["Alice", "Bob", "Carol"]
secondary_speakers = ["Dave"]
trailer = "Anything else?"
end_time = "10:30"
"#,
    );

    let plan = plan_json(temp.path(), &["--config", &config]);

    assert_eq!(plan["deadline"], "10:30");
    assert_eq!(plan["welcome"], "Morning!");

    let speakers: Vec<&str> = plan["speakers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(speakers.len(), 5);
    let mut primary = speakers[..3].to_vec();
    primary.sort_unstable();
    assert_eq!(primary, ["Alice", "Bob", "Carol"]);
    assert_eq!(speakers[3], "Dave");
    assert_eq!(speakers[4], "Anything else?");
}

#[test]
fn test_plan_reads_default_config_location() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config/standup");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "primary_speakers = [\"Solo\"]\nsecondary_speakers = []\ntrailer = \"\"\n",
    )
    .unwrap();

    let plan = plan_json(temp.path(), &[]);
    assert_eq!(plan["speakers"], serde_json::json!(["Solo"]));
    assert_eq!(plan["deadline"], "09:25");
}

#[test]
fn test_plan_end_time_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "end_time = \"10:30\"\n");

    let plan = plan_json(temp.path(), &["--config", &config, "--end-time", "11:45"]);
    assert_eq!(plan["deadline"], "11:45");
}

#[test]
fn test_plan_environment_overrides() {
    let temp = TempDir::new().unwrap();

    let output = Command::new(standup_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .env("STANDUP_END_TIME", "09:45")
        .env("STANDUP_TEAM_NAME", "2024")
        .env("STANDUP_TITLE", "42")
        .args(["plan", "--json"])
        .output()
        .expect("failed to run standup");
    assert!(
        output.status.success(),
        "numeric-looking overrides should load: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["deadline"], "09:45");
    assert_eq!(plan["team_name"], "2024");
    assert_eq!(plan["title"], "42");
}

#[test]
fn test_plan_seed_is_reproducible() {
    let temp = TempDir::new().unwrap();

    let first = plan_json(temp.path(), &["--seed", "17"]);
    let second = plan_json(temp.path(), &["--seed", "17"]);
    assert_eq!(first["speakers"], second["speakers"]);
}

#[test]
fn test_plan_text_output() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "title = \"Daily\"\nprimary_speakers = [\"Alice\"]\nsecondary_speakers = []\ntrailer = \"\"\n",
    );

    let output = standup(temp.path(), &["plan", "--config", &config]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Daily (ends 09:25)\n"), "{stdout}");
    assert!(stdout.contains("Per speaker: "), "{stdout}");
    assert!(stdout.contains(" 1. Alice"), "{stdout}");
}

#[test]
fn test_invalid_end_time_fails_fast() {
    let temp = TempDir::new().unwrap();

    let output = standup(temp.path(), &["plan", "--end-time", "9.25"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid end_time in configuration"), "{stderr}");
    assert!(stderr.contains("expected HH:MM"), "{stderr}");
}

#[test]
fn test_empty_primary_speakers_fails_fast() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "primary_speakers = []\n");

    let output = standup(temp.path(), &["plan", "--config", &config]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("at least one primary speaker is required"),
        "{stderr}"
    );
}
