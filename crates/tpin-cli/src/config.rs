//! Configuration at `<config dir>/tmux-pin/config.toml`.
//!
//! Names where the pinned list and the log file live and which tmux binary
//! to run. CLI flags always override config file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "tmux-pin";

/// Top-level config file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub tmux: TmuxConfig,
}

/// Where the pinned list is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (empty = `<config dir>/tmux-pin`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Pinned list file name inside the data directory.
    #[serde(default = "default_pinned_file")]
    pub pinned_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            pinned_file: default_pinned_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file name inside the data directory.
    #[serde(default = "default_log_file")]
    pub file: String,

    /// Tracing filter directive, e.g. "info" or "tpin_core=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmuxConfig {
    /// tmux executable name or path.
    #[serde(default = "default_tmux_binary")]
    pub binary: String,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            binary: default_tmux_binary(),
        }
    }
}

fn default_pinned_file() -> String {
    "pinned".to_string()
}

fn default_log_file() -> String {
    format!("{APP_NAME}.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tmux_binary() -> String {
    "tmux".to_string()
}

/// `<config dir>/tmux-pin`.
pub fn app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("cannot determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Default location of the config file.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file, returning defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => app_dir(),
        }
    }

    pub fn pinned_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.storage.pinned_file))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.log.file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = Config::default();
        assert!(cfg.storage.data_dir.is_none());
        assert_eq!(cfg.storage.pinned_file, "pinned");
        assert_eq!(cfg.log.file, "tmux-pin.log");
        assert_eq!(cfg.log.level, "info");
        assert_eq!(cfg.tmux.binary, "tmux");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[storage]
data_dir = "/var/lib/pins"
pinned_file = "favourites"

[log]
file = "pins.log"
level = "debug"

[tmux]
binary = "/opt/bin/tmux"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.storage.data_dir, Some(PathBuf::from("/var/lib/pins")));
        assert_eq!(cfg.pinned_path().unwrap(), PathBuf::from("/var/lib/pins/favourites"));
        assert_eq!(cfg.log_path().unwrap(), PathBuf::from("/var/lib/pins/pins.log"));
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.tmux.binary, "/opt/bin/tmux");
    }

    #[test]
    fn parse_partial_toml_config() {
        let toml_str = r#"
[tmux]
binary = "tmux-next"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.tmux.binary, "tmux-next");
        assert_eq!(cfg.storage.pinned_file, "pinned"); // default
        assert_eq!(cfg.log.level, "info"); // default
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.storage.pinned_file, "pinned");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\npinned_file = 3").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
