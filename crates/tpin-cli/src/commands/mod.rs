//! CLI subcommand implementations.

pub mod interactive;
pub mod list;
pub mod switch;

use anyhow::{Context, Result};
use tpin_core::{PinnedFile, SessionController, Tmux};

use crate::config::Config;

pub(crate) type Controller = SessionController<Tmux, PinnedFile>;

/// Build the controller from config: tmux binary plus pinned list file.
pub(crate) fn controller(config: &Config) -> Result<Controller> {
    let tmux = Tmux::new(config.tmux.binary.clone());
    let pinned = PinnedFile::new(config.pinned_path()?);
    SessionController::new(tmux, pinned).context("failed to load sessions")
}
