//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write a JSON-lines action script next to a config in `dir`.
pub fn temp_script(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("actions.jsonl");
    std::fs::write(&path, lines.join("\n")).expect("Failed to write script");
    path
}

/// The binary under test, with logging quiet unless asked for.
pub fn todo_flow_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo-flow"));
    cmd.env("RUST_LOG", "off");
    cmd
}
