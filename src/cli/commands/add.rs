use crate::config::Config;
use crate::error::{NoteError, Result};
use crate::model::NewNote;
use crate::util;
use crate::validation::NoteValidator;

use super::{open_repository, workspace_db};

/// Execute the add command.
///
/// Validation happens here, before submission; a rejected note never
/// reaches the store (no row is created).
///
/// # Errors
///
/// Returns an error if validation fails, the workspace is missing, or
/// the store reports a fault through the insert's completion.
pub fn execute(title: &str, content: &str, export: bool) -> Result<()> {
    NoteValidator::validate(title, content).map_err(NoteError::from_validation_errors)?;

    let db_path = workspace_db()?;
    let repo = open_repository()?;
    let id = repo.insert(NewNote::new(title, content)).wait()?;
    println!("Created note {id}: {title}");

    if export {
        // Close the store first so the copy sees a settled file.
        drop(repo);
        let config = Config::load(&util::notes_dir())?;
        let dest_dir = config
            .export_dir
            .unwrap_or_else(super::export::default_export_dir);
        let dest = util::export_database(&db_path, &dest_dir)?;
        println!("Exported database to {}", util::display_path(&dest).display());
    }

    Ok(())
}
