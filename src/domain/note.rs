//! Note listing entries.
//!
//! A [`NoteFile`] is a read-only snapshot of one vault entry, captured when the
//! vault is listed. It is not refreshed if the file changes afterwards.

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Display format for modification times, e.g. `Jan 2, 2006 at 3:04pm`.
const LAST_EDITED_FORMAT: &str = "%b %-d, %Y at %-I:%M%P";

/// A note file discovered in the vault.
///
/// # Fields
///
/// - `name`: File name of the entry, e.g. `todo.md`
/// - `path`: Absolute path under the vault root
/// - `last_modified`: Modification time when the snapshot was taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub name: String,
    pub path: PathBuf,
    pub last_modified: DateTime<Local>,
}

impl NoteFile {
    /// Creates a note entry.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, last_modified: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            last_modified,
        }
    }

    /// Returns the human-readable modification time shown in the note list.
    #[must_use]
    pub fn last_edited(&self) -> String {
        format!("Last edited: {}", self.last_modified.format(LAST_EDITED_FORMAT))
    }
}
