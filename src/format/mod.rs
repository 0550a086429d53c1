//! Output formatting for `notes_rust`.
//!
//! Supports human-readable text output and machine-parseable JSON
//! (`--json` sends clean JSON to stdout, diagnostics stay on stderr).

mod text;

pub use text::{format_note_line, format_note_list};
