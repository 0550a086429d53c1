//! Command implementations.

pub mod add;
pub mod clear;
pub mod completions;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod watch;

use std::path::PathBuf;

use crate::error::{NoteError, Result};
use crate::repo::NoteRepository;
use crate::util;

/// Locate the workspace database, or fail if `nt init` hasn't run.
pub(crate) fn workspace_db() -> Result<PathBuf> {
    if !util::notes_dir().exists() {
        return Err(NoteError::NotInitialized);
    }
    Ok(util::db_path())
}

/// Open the workspace store behind its repository façade.
pub(crate) fn open_repository() -> Result<NoteRepository> {
    NoteRepository::open(workspace_db()?)
}
