//! Workspace paths and the database export utility.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Workspace directory name.
pub const NOTES_DIR: &str = ".notes";

/// Database file name inside the workspace.
pub const DB_FILE: &str = "notes.db";

/// The workspace directory in the current working directory.
#[must_use]
pub fn notes_dir() -> PathBuf {
    PathBuf::from(NOTES_DIR)
}

/// The database path inside the workspace.
#[must_use]
pub fn db_path() -> PathBuf {
    notes_dir().join(DB_FILE)
}

/// A path normalized for display (strips `\\?\` on Windows).
#[must_use]
pub fn display_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Byte-for-byte copy of the backing database file into `dest_dir`.
///
/// Runs outside the store's transactional guarantees: it may race an
/// in-flight write, and no consistency of the copy is promised. Close
/// the store (drop the repository) first for a clean snapshot.
///
/// # Errors
///
/// Returns `Io` if the source cannot be read or the destination
/// cannot be created or written.
pub fn export_database(db_path: &Path, dest_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(DB_FILE);

    let mut src = File::open(db_path)?;
    let mut out = File::create(&dest)?;
    let bytes = io::copy(&mut src, &mut out)?;
    out.sync_all()?;

    info!(bytes, dest = %dest.display(), "exported database");
    Ok(dest)
}
