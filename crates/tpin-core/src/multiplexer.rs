//! Multiplexer process control.
//!
//! [`Multiplexer`] is the seam the controller talks to; [`Tmux`] implements
//! it by spawning the tmux CLI. All calls block until tmux returns.

use std::process::{Command, Output};

use tracing::debug;

use crate::error::{PinError, PinResult};

/// Session-level operations on a terminal multiplexer.
pub trait Multiplexer {
    /// Names of all live sessions, in the order the multiplexer reports them.
    fn list_sessions(&self) -> PinResult<Vec<String>>;

    /// Name of the session the calling client is attached to.
    fn current_session(&self) -> PinResult<String>;

    fn switch_to(&self, name: &str) -> PinResult<()>;

    /// Create a detached session.
    fn create_session(&self, name: &str) -> PinResult<()>;

    fn rename_session(&self, old: &str, new: &str) -> PinResult<()>;

    fn session_exists(&self, name: &str) -> bool;

    fn kill_session(&self, name: &str) -> PinResult<()>;
}

/// tmux driven through its command line.
#[derive(Debug, Clone)]
pub struct Tmux {
    binary: String,
}

impl Tmux {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, command: &str, args: &[&str]) -> PinResult<Output> {
        debug!(binary = %self.binary, command, ?args, "tmux");
        let out = Command::new(&self.binary)
            .arg(command)
            .args(args)
            .output()
            .map_err(|e| PinError::multiplexer(command, e.to_string()))?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                out.status.to_string()
            } else {
                stderr
            };
            return Err(PinError::multiplexer(command, message));
        }
        Ok(out)
    }
}

impl Multiplexer for Tmux {
    fn list_sessions(&self) -> PinResult<Vec<String>> {
        let out = self.run("list-sessions", &["-F", "#{session_name}"])?;
        Ok(parse_session_list(&String::from_utf8_lossy(&out.stdout)))
    }

    fn current_session(&self) -> PinResult<String> {
        let out = self.run("display-message", &["-p", "#S"])?;
        Ok(String::from_utf8_lossy(&out.stdout).trim_end_matches('\n').to_string())
    }

    fn switch_to(&self, name: &str) -> PinResult<()> {
        self.run("switch-client", &["-t", &exact(name)]).map(drop)
    }

    fn create_session(&self, name: &str) -> PinResult<()> {
        self.run("new-session", &["-d", "-s", name]).map(drop)
    }

    fn rename_session(&self, old: &str, new: &str) -> PinResult<()> {
        self.run("rename-session", &["-t", &exact(old), new]).map(drop)
    }

    fn session_exists(&self, name: &str) -> bool {
        self.run("has-session", &["-t", &exact(name)]).is_ok()
    }

    fn kill_session(&self, name: &str) -> PinResult<()> {
        self.run("kill-session", &["-t", &exact(name)]).map(drop)
    }
}

/// Fail unless we run inside a tmux client with a live server.
pub fn ensure_running() -> PinResult<()> {
    check_tmux_env(std::env::var("TMUX").ok().as_deref())?;

    let out = Command::new("pgrep")
        .arg("tmux")
        .output()
        .map_err(|e| PinError::Environment(format!("cannot run pgrep: {e}")))?;
    if !out.status.success() || String::from_utf8_lossy(&out.stdout).trim().is_empty() {
        return Err(PinError::Environment("no tmux server process found".into()));
    }
    Ok(())
}

/// tmux resolves bare targets by prefix; `=` forces an exact session match.
fn exact(name: &str) -> String {
    format!("={name}")
}

fn check_tmux_env(value: Option<&str>) -> PinResult<()> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(PinError::Environment("$TMUX not found".into())),
    }
}

/// One session name per output line; blank lines are skipped.
pub fn parse_session_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
