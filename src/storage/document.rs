//! Open note documents and the file handles behind them.
//!
//! An [`ActiveDocument`] owns the only open handle to a note while it is being
//! edited. Dropping the document releases the handle. Writes go through the
//! [`NoteHandle`] trait so the save path can be exercised against handles that
//! fail at a chosen step.

use std::fmt;
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

/// Writable handle to a note file.
///
/// The save sequence is `truncate` → `rewind` → `write_all` → `close`.
pub trait NoteHandle: Write + Seek + fmt::Debug {
    /// Truncates the underlying file to zero length.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the filesystem.
    fn truncate(&mut self) -> io::Result<()>;

    /// Flushes written data to disk and releases the handle.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported while flushing.
    fn close(self: Box<Self>) -> io::Result<()>;
}

impl NoteHandle for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        self.sync_all()
    }
}

/// A note opened for editing.
///
/// Holds the note's content in memory together with the open handle. Edits
/// only touch `content`; the file changes when the document is saved through
/// [`NoteStore::save_and_close`](super::NoteStore::save_and_close).
pub struct ActiveDocument {
    path: PathBuf,
    /// In-memory content, mutated by the editor.
    pub content: String,
    handle: Box<dyn NoteHandle>,
}

impl ActiveDocument {
    /// Wraps an open handle and the content read from it.
    pub fn new(path: impl Into<PathBuf>, content: String, handle: Box<dyn NoteHandle>) -> Self {
        Self {
            path: path.into(),
            content,
            handle,
        }
    }

    /// Path of the note on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the note, e.g. `todo.md`.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }

    /// Splits the document into its path, content and handle.
    pub(crate) fn into_parts(self) -> (PathBuf, String, Box<dyn NoteHandle>) {
        (self.path, self.content, self.handle)
    }
}

impl fmt::Debug for ActiveDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveDocument")
            .field("path", &self.path)
            .field("content_len", &self.content.len())
            .finish_non_exhaustive()
    }
}
