mod common;

use common::temp_config;
use std::time::Duration;
use todo_flow::config::{Config, ConfigError};
use todo_flow::todos::{TodoError, TodoId, VisibilityFilter};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert_eq!(config.state.filter, VisibilityFilter::ShowAll);
    assert!(config.state.todos.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("todo-flow/config.toml"));
}

#[test]
fn test_log_path_defaults_to_data_dir() {
    let config = Config::default();
    assert!(config.logging.log_path().ends_with("todo-flow/todo-flow.log"));
}

#[test]
fn test_missing_file_returns_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.initial_state().unwrap(), Default::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config("[logging]\nlevel = \"debug\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_seed_todos_load_with_ordered_ids() {
    let (_dir, path) = temp_config(
        r#"
[state]
filter = "SHOW_ACTIVE"

[[state.todos]]
text = "buy milk"
completed = true

[[state.todos]]
text = "walk dog"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let state = config.initial_state().unwrap();

    assert_eq!(state.visibility_filter, VisibilityFilter::ShowActive);
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.todos[0].id(), TodoId(0));
    assert!(state.todos[0].completed());
    assert_eq!(state.todos[1].text(), "walk dog");
    assert!(!state.todos[1].completed());
    assert_eq!(state.next_id(), TodoId(2));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_unknown_filter_is_parse_error() {
    let (_dir, path) = temp_config("[state]\nfilter = \"SHOW_SOME\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_blank_seed_text_reports_index() {
    let (_dir, path) = temp_config(
        r#"
[[state.todos]]
text = "ok"

[[state.todos]]
text = "   "
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::InvalidTodo { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, TodoError::EmptyText);
        }
        other => panic!("expected InvalidTodo, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[ui\ntick_rate_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}
