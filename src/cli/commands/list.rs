//! List command implementation.
//!
//! Reads through the live query: subscribing yields the current
//! snapshot as the first delivery, which is exactly what a one-shot
//! listing needs.

use crate::error::Result;
use crate::format::format_note_list;

use super::open_repository;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the snapshot read fails.
pub fn execute(json: bool) -> Result<()> {
    let repo = open_repository()?;
    let notes = repo.get_all_notes()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else {
        println!("{}", format_note_list(&notes));
    }

    Ok(())
}
