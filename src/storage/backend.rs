//! Note store abstraction.
//!
//! This module defines the [`NoteStore`] trait the state machine drives. Each
//! method maps to one vault operation used by a mode transition.

use crate::domain::error::{Result, VaultError};
use crate::domain::NoteFile;
use crate::storage::document::ActiveDocument;

/// A save that did not complete.
///
/// Carries the document back to the caller so the edit is not lost and the
/// save can be re-issued.
#[derive(Debug)]
pub struct SaveFailure {
    /// The document that failed to save, with its in-memory content intact.
    pub document: ActiveDocument,
    /// Why the save failed.
    pub error: VaultError,
}

/// Persistent storage of notes.
///
/// # Implementations
///
/// - [`VaultStore`](super::VaultStore): plain files in a vault directory
///
/// # Examples
///
/// ```no_run
/// use hackpad::storage::{NoteStore, VaultStore};
/// use std::path::PathBuf;
///
/// let store = VaultStore::open(PathBuf::from("/tmp/vault"))?;
/// let note = store.create_note("todo")?;
/// let mut doc = store.open_for_edit(&note.name)?;
/// doc.content.push_str("hello");
/// store.save_and_close(doc).map_err(|failure| failure.error)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait NoteStore {
    /// Lists the notes in the vault, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Io`] if the vault directory cannot be read.
    fn list_notes(&self) -> Result<Vec<NoteFile>>;

    /// Creates an empty note `<name>.md`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::AlreadyExists`] if the note exists,
    /// [`VaultError::InvalidName`] if the name cannot be used as a file name, or
    /// [`VaultError::Io`] if creation fails.
    fn create_note(&self, name: &str) -> Result<NoteFile>;

    /// Creates an empty note `<name>.md` and opens it for editing.
    ///
    /// The returned document writes through the handle that created the file,
    /// so a failure can never leave a fresh note behind without a document.
    ///
    /// # Errors
    ///
    /// Same as [`create_note`](Self::create_note).
    fn create_for_edit(&self, name: &str) -> Result<ActiveDocument>;

    /// Opens the vault entry `file_name` for editing and reads its content.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotFound`] if the entry does not exist and
    /// [`VaultError::Io`] if it cannot be opened or read.
    fn open_for_edit(&self, file_name: &str) -> Result<ActiveDocument>;

    /// Overwrites the note with the document's content and releases the handle.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveFailure`] holding the document. Its error is
    /// [`VaultError::Truncated`] if the file was already emptied when the
    /// failure happened.
    fn save_and_close(&self, document: ActiveDocument) -> std::result::Result<(), SaveFailure>;

    /// Releases the document's handle without writing.
    fn discard_edit(&self, document: ActiveDocument);
}
