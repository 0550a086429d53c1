//! Text formatting functions for `notes_rust`.
//!
//! Plain (non-ANSI) terminal output. Titles are padded to a column so
//! content lines up; wide (CJK, emoji) titles pad correctly via
//! `unicode-width`.

use unicode_width::UnicodeWidthStr;

use crate::model::Note;

/// Column width reserved for note titles.
const TITLE_COL: usize = 24;

/// Format a single-line note summary.
///
/// Format: `{id:>4}  {title}  {content}`
#[must_use]
pub fn format_note_line(note: &Note) -> String {
    let title_width = note.title.width();
    let pad = TITLE_COL.saturating_sub(title_width);
    format!(
        "{:>4}  {}{}  {}",
        note.id,
        note.title,
        " ".repeat(pad),
        note.content
    )
}

/// Format a whole snapshot, one note per line, with a trailing count.
#[must_use]
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }
    let mut out = String::new();
    for note in notes {
        out.push_str(&format_note_line(note));
        out.push('\n');
    }
    out.push_str(&format!("\n{} note(s)", notes.len()));
    out
}
