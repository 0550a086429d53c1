use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::util;

use super::workspace_db;

/// Fallback export directory when neither an argument nor config sets one.
pub(crate) fn default_export_dir() -> PathBuf {
    PathBuf::from("notes-export")
}

/// Execute the export command.
///
/// Byte-for-byte copy of the backing database file. Destination
/// precedence: CLI argument, then `export_dir` in config, then
/// `./notes-export`.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the copy fails.
pub fn execute(dest: Option<&Path>) -> Result<()> {
    let db_path = workspace_db()?;

    let dest_dir = match dest {
        Some(dir) => dir.to_path_buf(),
        None => {
            let config = Config::load(&util::notes_dir())?;
            config.export_dir.unwrap_or_else(default_export_dir)
        }
    };

    let exported = util::export_database(&db_path, &dest_dir)?;
    println!(
        "Exported database to {}",
        util::display_path(&exported).display()
    );
    Ok(())
}
