use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;

use todo_flow::config::Config;
use todo_flow::headless::{load_script, run_script};
use todo_flow::logging::{init_tracing, LogTarget};
use todo_flow::shutdown::ShutdownHandle;
use todo_flow::todos::{TodoStore, VisibilityFilter};
use todo_flow::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "todo-flow", version, about = "Terminal todo list")]
struct Cli {
    /// Config file (default: <config_dir>/todo-flow/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the initial visibility filter (all, active, completed)
    #[arg(long, value_name = "NAME")]
    filter: Option<VisibilityFilter>,

    /// Run a JSON-lines file of actions without the UI and print the result
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    let mut initial = config.initial_state()?;
    if let Some(filter) = cli.filter {
        initial.visibility_filter = filter;
    }
    let store = Rc::new(TodoStore::new(initial));

    if let Some(script) = cli.script {
        init_tracing(&config.logging, LogTarget::Stderr)?;
        log_config_source(&config_path);
        let actions = load_script(&script)?;
        let props = run_script(store, actions);
        let json = serde_json::to_string_pretty(&props).context("Failed to encode props")?;
        println!("{json}");
        return Ok(());
    }

    init_tracing(&config.logging, LogTarget::File(config.logging.log_path()))?;
    log_config_source(&config_path);
    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;
    tracing::info!(config = %config_path.display(), "Starting todo-flow");

    runtime::run(&config, store, shutdown).context("Terminal UI failed")
}

/// Config is loaded before the subscriber exists, so its source is logged here.
fn log_config_source(path: &Path) {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Loaded config file");
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
    }
}
