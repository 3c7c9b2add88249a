//! tmux-pin: pinned tmux session switcher.
//!
//! Keeps a persisted, ordered shortlist of tmux sessions and offers a
//! single-keystroke menu to reorder, pin, switch to, create, rename and
//! kill sessions.

mod commands;
mod config;
mod terminal;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use crate::config::Config;

/// tmux-pin: pinned tmux session switcher
#[derive(Parser)]
#[command(name = "tmux-pin", version, about = "Pin, order and switch between tmux sessions")]
struct Cli {
    /// Config file path
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive menu (default)
    #[command(visible_alias = "it")]
    Interactive,

    /// Print the pinned sessions with their slot numbers
    List,

    /// Switch to a pinned session by slot number
    Switch {
        /// Pinned slot, starting at 1
        slot: usize,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("tmux-pin: {e:#}");
            1
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    // Outside tmux nothing else is touched: no config read, no log file.
    tpin_core::ensure_running()?;

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let cfg = Config::load(&config_path)?;
    init_tracing(&cfg, cli.verbose)?;
    debug!(config = %config_path.display(), "starting");

    match cli.command {
        None | Some(Command::Interactive) => commands::interactive::run(&cfg).await,
        Some(Command::List) => commands::list::run(&cfg).map(|()| 0),
        Some(Command::Switch { slot }) => commands::switch::run(&cfg, slot).map(|()| 0),
    }
}

/// Send tracing output to the log file; the terminal belongs to the menu.
fn init_tracing(cfg: &Config, verbose: bool) -> Result<()> {
    let path = cfg.log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = if verbose {
        "tmux_pin=debug,tpin_core=debug".to_string()
    } else {
        cfg.log.level.clone()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(verbose)
        .init();
    Ok(())
}
