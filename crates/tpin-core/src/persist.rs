//! Line-oriented storage for the pinned session list.
//!
//! Format: one session name per line. Blank lines are ignored on load and
//! surrounding whitespace is trimmed. Names containing newlines cannot be
//! represented.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PinResult;

/// Load/store primitives for the pinned list.
pub trait PinStorage {
    /// Read the stored names. A store that has never been written yields an
    /// empty list.
    fn load_lines(&self) -> PinResult<Vec<String>>;

    /// Replace the stored names with `lines`.
    fn store_lines(&self, lines: &[String]) -> PinResult<()>;
}

/// Pinned list kept in a plain text file.
#[derive(Debug, Clone)]
pub struct PinnedFile {
    path: PathBuf,
}

impl PinnedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PinStorage for PinnedFile {
    fn load_lines(&self) -> PinResult<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "pinned file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn store_lines(&self, lines: &[String]) -> PinResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = lines.len(), "stored pinned sessions");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
