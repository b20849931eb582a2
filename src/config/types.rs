use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::todos::VisibilityFilter;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// State the store is created with.
    #[serde(default)]
    pub state: StateConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Preloaded application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default)]
    pub filter: VisibilityFilter,
    #[serde(default)]
    pub todos: Vec<SeedTodo>,
}

/// A todo listed in the config file. Ids are assigned in order on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTodo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `<data_dir>/todo-flow/todo-flow.log`.
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("todo-flow")
                .join("todo-flow.log")
        })
    }
}
