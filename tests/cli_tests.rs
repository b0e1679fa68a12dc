//! End-to-end checks of the `rarescout` binary.
//!
//! Every command runs in an empty temp directory with the monitor's
//! environment cleared, so no `.env` or `config.toml` leaks in.

mod support;

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use support::MONITOR_ENV_VARS;
use tempfile::TempDir;

fn rarescout(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rarescout");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    for var in MONITOR_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn with_required_env(cmd: &mut Command) -> &mut Command {
    cmd.env("COLLECTION_SLUG", "milady-maker")
        .env("CONTRACT_ADDRESS", "0x5af0d9827e0c53e4799bb226655a1de152a425a5")
        .env("TELEGRAM_BOT_TOKEN", "1234567890:ABCDEFGHIJKLMNOP")
        .env("TELEGRAM_USER_ID", "42")
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_names_the_binary() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rarescout"));
}

#[test]
fn unknown_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path()).arg("frobnicate").assert().failure();
}

#[test]
fn check_config_reports_every_missing_input() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .args(["--json", "check", "config"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("COLLECTION_SLUG"))
        .stdout(predicate::str::contains("TELEGRAM_USER_ID"))
        .stderr(predicate::str::contains("missing required configuration"));
}

#[test]
fn check_config_resolves_threshold_from_collection_table() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rarescout(dir.path());
    with_required_env(&mut cmd)
        .args(["--json", "check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("milady-maker"))
        .stdout(predicate::str::contains("\"value\":\"150\""))
        .stdout(predicate::str::contains("partial match (milady)"))
        .stdout(predicate::str::contains("\"value\":\"unbounded\""));
}

#[test]
fn check_config_honors_threshold_override() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rarescout(dir.path());
    with_required_env(&mut cmd)
        .env("MIN_SCORE_THRESHOLD", "12.5")
        .args(["--json", "check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\":\"12.5\""))
        .stdout(predicate::str::contains("explicit override"));
}

#[test]
fn check_config_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[monitor\n").unwrap();

    rarescout(dir.path())
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn check_config_requires_explicit_file_to_exist() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .args(["check", "config", "-c", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn check_cache_summarizes_categories() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("traits_cache.json"),
        r#"{ "Background": { "Blue": 100, "Red": 200 }, "Hat": { "Beret": 12 } }"#,
    )
    .unwrap();

    rarescout(dir.path())
        .args(["--json", "check", "cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\":\"Background\""))
        .stdout(predicate::str::contains("2 values, 300 tokens"))
        .stdout(predicate::str::contains("1 values, 12 tokens"));
}

#[test]
fn check_cache_reads_path_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(
        dir.path().join("data/milady.json"),
        r#"{ "Eyes": { "Laser": 3 } }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[monitor]\ntrait_cache_path = \"data/milady.json\"\n",
    )
    .unwrap();

    rarescout(dir.path())
        .args(["--json", "check", "cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data/milady.json"))
        .stdout(predicate::str::contains("\"label\":\"Eyes\""));
}

#[test]
fn check_cache_warns_when_empty() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .args(["--json", "check", "cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"warning\""));
}

#[test]
fn check_telegram_requires_credentials() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .args(["check", "telegram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN"));
}

#[test]
fn run_exits_with_error_when_configuration_is_missing() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .arg("run")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required configuration"))
        .stderr(predicate::str::contains("CONTRACT_ADDRESS"));
}

#[test]
fn run_rejects_invalid_threshold_flag() {
    let dir = TempDir::new().unwrap();
    rarescout(dir.path())
        .args(["run", "--threshold", "lots"])
        .assert()
        .failure();
}

#[test]
fn quiet_check_config_keeps_only_warnings() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rarescout(dir.path());
    with_required_env(&mut cmd)
        .args(["--quiet", "check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No API key configured"))
        .stdout(predicate::str::contains("milady-maker").not());
}

#[test]
fn check_config_json_lists_run_settings() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rarescout(dir.path());
    with_required_env(&mut cmd)
        .env("TOTAL_SUPPLY", "10000")
        .args(["--json", "check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"label":"Supply","value":"10000"}"#,
        ))
        .stdout(predicate::str::contains("every 3000 ms, 5000 ms after errors"));
}
