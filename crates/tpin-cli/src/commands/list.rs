//! `tmux-pin list`: print the pinned sessions.
//!
//! The `>` marker sits on the current session when it is pinned. Numbers
//! are the 1-based slots accepted by `switch` and the digit keys.

use anyhow::Result;
use tracing::debug;

use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let controller = super::controller(config)?;
    debug!(count = controller.store().pinned().len(), "listing pinned sessions");
    print!("{}", controller.pinned_listing());
    Ok(())
}
