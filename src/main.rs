//! `notes_rust` (nt) - single-user note-taking CLI.
//!
//! Local-only by design: one SQLite file, one background writer lane,
//! no networking, no daemons.

use notes_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
