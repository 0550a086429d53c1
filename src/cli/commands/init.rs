use std::fs;

use crate::error::{NoteError, Result};
use crate::storage::SqliteStorage;
use crate::util;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the directory or database cannot be created.
pub fn execute(force: bool) -> Result<()> {
    let notes_dir = util::notes_dir();

    if notes_dir.exists() {
        let db_path = notes_dir.join(util::DB_FILE);
        if db_path.exists() {
            if !force {
                return Err(NoteError::AlreadyInitialized { path: db_path });
            }
            fs::remove_file(&db_path)?;
        }
    } else {
        fs::create_dir(&notes_dir)?;
    }

    // Creates the file and applies the schema.
    let _storage = SqliteStorage::open(notes_dir.join(util::DB_FILE))?;

    let config_path = notes_dir.join("config.yaml");
    if !config_path.exists() {
        let config = r"# Notes workspace configuration
# export_dir: /path/to/backups
";
        fs::write(config_path, config)?;
    }

    let gitignore_path = notes_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let gitignore = r"# Database
*.db
*.db-shm
*.db-wal
";
        fs::write(gitignore_path, gitignore)?;
    }

    println!("Initialized notes workspace in {}/", util::NOTES_DIR);
    Ok(())
}
