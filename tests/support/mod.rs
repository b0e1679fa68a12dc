#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    (dir, path)
}

pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    write_temp_file("config.toml", contents)
}

/// No environment at all.
pub fn no_env(_key: &str) -> Option<String> {
    None
}

/// Every environment variable the monitor reads.
pub const MONITOR_ENV_VARS: &[&str] = &[
    "COLLECTION_SLUG",
    "CONTRACT_ADDRESS",
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_USER_ID",
    "TELEGRAM_CHAT_ID",
    "OPENSEA_API_KEY",
    "MIN_SCORE_THRESHOLD",
    "TOTAL_SUPPLY",
];
