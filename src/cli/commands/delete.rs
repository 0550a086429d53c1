use crate::error::Result;

use super::open_repository;

/// Execute the delete command.
///
/// Deleting a nonexistent id is a successful no-op, matching the
/// store's contract.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the store faults.
pub fn execute(id: i64) -> Result<()> {
    let repo = open_repository()?;
    repo.delete(id).wait()?;
    println!("Deleted note {id} (if it existed)");
    Ok(())
}
