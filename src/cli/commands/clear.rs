use crate::error::Result;

use super::open_repository;

/// Execute the clear command.
///
/// Removes every note. Idempotent; clearing an empty store succeeds.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the store faults.
pub fn execute() -> Result<()> {
    let repo = open_repository()?;
    let count = repo.get_all_notes()?.len();
    repo.delete_all().wait()?;
    println!("Cleared {count} note(s)");
    Ok(())
}
