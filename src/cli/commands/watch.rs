//! Watch command implementation.
//!
//! Subscribes to the live query and prints every snapshot the store
//! pushes, starting with the current one, until the process is
//! interrupted. Mutations must come from tasks submitted within this
//! process's repository, so this is mostly a demonstration and
//! debugging surface for the notification contract.

use crate::error::Result;
use crate::format::format_note_list;

use super::open_repository;

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the subscription
/// cannot be established.
pub fn execute(json: bool) -> Result<()> {
    let repo = open_repository()?;
    let sub = repo.subscribe()?;

    eprintln!("Watching for changes (Ctrl-C to stop)...");
    for snapshot in sub.iter() {
        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("{}", format_note_list(&snapshot));
        }
    }
    Ok(())
}
