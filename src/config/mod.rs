//! Configuration management for `notes_rust`.
//!
//! Configuration lives in `.notes/config.yaml`. A missing file yields
//! the defaults; a malformed file is an error, not silently ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NoteError, Result};

/// Workspace configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination directory for `nt export` when no path is given.
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from a workspace directory.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file exists but cannot be read or parsed.
    pub fn load(notes_dir: &Path) -> Result<Self> {
        let path = notes_dir.join("config.yaml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| NoteError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| NoteError::Config(format!("cannot parse {}: {e}", path.display())))
    }
}
