//! `tmux-pin switch <N>`: switch to pinned slot N without the menu.

use anyhow::Result;

use crate::config::Config;

pub fn run(config: &Config, slot: usize) -> Result<()> {
    let mut controller = super::controller(config)?;
    controller.switch_to_slot(slot)?;
    Ok(())
}
