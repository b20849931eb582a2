//! Tests for CLI argument parsing and the headless script mode.

mod common;

use common::{temp_config, temp_script, todo_flow_cmd};

#[test]
fn test_help_lists_options() {
    let output = todo_flow_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--script"));
}

#[test]
fn test_script_prints_final_props() {
    let (dir, config) = temp_config("");
    let script = temp_script(
        &dir,
        &[
            r#"{"type":"ADD_TODO","text":"a"}"#,
            r#"{"type":"ADD_TODO","text":"b"}"#,
            "# complete the first one",
            r#"{"type":"COMPLETE_TODO","id":0}"#,
            r#"{"type":"SET_VISIBILITY_FILTER","filter":"SHOW_ACTIVE"}"#,
        ],
    );

    let output = todo_flow_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let props: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(props["visibility_filter"], "SHOW_ACTIVE");
    let visible = props["visible_todos"].as_array().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0]["text"], "b");
    assert_eq!(visible[0]["completed"], false);
}

#[test]
fn test_filter_flag_overrides_config() {
    let (dir, config) = temp_config(
        "[state]\nfilter = \"SHOW_ACTIVE\"\n\n[[state.todos]]\ntext = \"done\"\ncompleted = true\n",
    );
    let script = temp_script(&dir, &[]);

    let output = todo_flow_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--filter", "completed"])
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let props: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(props["visibility_filter"], "SHOW_COMPLETED");
    assert_eq!(props["visible_todos"][0]["text"], "done");
}

#[test]
fn test_invalid_filter_flag_is_rejected() {
    let output = todo_flow_cmd()
        .args(["--filter", "someday"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("someday"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config) = temp_config("[ui]\ntick_rate_ms = 0\n");

    let output = todo_flow_cmd()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_bad_script_line_exits_with_error() {
    let (dir, config) = temp_config("");
    let script = temp_script(&dir, &[r#"{"type":"ADD_TODO","text":"a"}"#, "not json"]);

    let output = todo_flow_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid action on line 2"));
}

#[test]
fn test_missing_config_is_logged_in_script_mode() {
    let (dir, _config) = temp_config("");
    let script = temp_script(&dir, &[r#"{"type":"ADD_TODO","text":"a"}"#]);

    let output = todo_flow_cmd()
        .env("RUST_LOG", "debug")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No config file, using defaults"), "stderr: {stderr}");
}
