//! `tmux-pin` / `tmux-pin interactive`: the single-keystroke menu.
//!
//! The menu runs on a blocking task in raw mode while the main task waits
//! for SIGINT/SIGTERM. A signal restores the terminal and ends the process
//! with a failure status; the menu's own state is never touched from here.

use anyhow::{Context, Result};
use tpin_core::Flow;
use tracing::{info, warn};

use crate::config::Config;
use crate::terminal::{self, RawModeGuard, TerminalConsole};

/// Run the menu and return the process exit code.
pub async fn run(config: &Config) -> Result<i32> {
    let mut controller = super::controller(config)?;

    let menu = tokio::task::spawn_blocking(move || -> Result<Flow> {
        let _guard = RawModeGuard::enter()?;
        let mut console = TerminalConsole::new();
        let flow = controller.run(&mut console);
        console.clear()?;
        Ok(flow?)
    });

    tokio::select! {
        joined = menu => {
            let flow = joined.context("menu task failed")??;
            info!(?flow, "menu closed");
            Ok(match flow {
                Flow::Interrupted => 1,
                Flow::Exit | Flow::Continue => 0,
            })
        }
        name = shutdown_signal() => {
            terminal::restore();
            warn!(signal = name, "terminated by signal");
            Ok(1)
        }
    }
}

/// Resolve with the name of the first termination signal received.
async fn shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                warn!("cannot listen for SIGTERM: {e}");
                return match tokio::signal::ctrl_c().await {
                    Ok(()) => "SIGINT",
                    Err(_) => std::future::pending().await,
                };
            }
        };
        tokio::select! {
            Ok(()) = tokio::signal::ctrl_c() => "SIGINT",
            Some(()) = term.recv() => "SIGTERM",
            else => std::future::pending().await,
        }
    }

    #[cfg(not(unix))]
    {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(_) => std::future::pending().await,
        }
    }
}
