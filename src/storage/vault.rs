//! Directory-backed note storage.
//!
//! Notes are plain UTF-8 files directly under the vault root. There is no
//! index: listing reads the directory each time it is called.
//!
//! # Save Semantics
//!
//! Saving overwrites the note in place through the handle opened for editing:
//! truncate, rewind, write, flush. If anything fails after the truncation the
//! file is left empty or partial, and the failure is reported as
//! [`VaultError::Truncated`] so it is never mistaken for a clean abort.

use crate::domain::error::{HackpadError, Result, VaultError};
use crate::domain::NoteFile;
use crate::infrastructure::paths::ensure_private_dir;
use crate::storage::backend::{NoteStore, SaveFailure};
use crate::storage::document::{ActiveDocument, NoteHandle};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Extension given to notes created through the vault.
const NOTE_EXTENSION: &str = "md";

/// Vault of note files under a fixed root directory.
///
/// The root is resolved once at startup and passed in explicitly, so tests
/// can point a store at a temporary directory.
#[derive(Debug, Clone)]
pub struct VaultStore {
    root: PathBuf,
}

impl VaultStore {
    /// Opens the vault at `root`, creating the directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`HackpadError::VaultDirectory`] if the directory cannot be
    /// created.
    pub fn open(root: PathBuf) -> std::result::Result<Self, HackpadError> {
        tracing::debug!(root = ?root, "opening vault");

        ensure_private_dir(&root).map_err(|source| HackpadError::VaultDirectory {
            path: root.clone(),
            source,
        })?;

        Ok(Self { root })
    }

    /// Returns the vault root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file name a note called `name` is stored under.
    ///
    /// ```
    /// assert_eq!(hackpad::storage::VaultStore::file_name_for("todo"), "todo.md");
    /// ```
    #[must_use]
    pub fn file_name_for(name: &str) -> String {
        format!("{name}.{NOTE_EXTENSION}")
    }

    /// Resolves a single path component under the root.
    ///
    /// Rejects anything that would escape the root or nest into a
    /// subdirectory.
    fn entry_path(&self, entry: &str) -> Option<PathBuf> {
        let trimmed = entry.trim();
        if trimmed.is_empty()
            || entry == "."
            || entry == ".."
            || entry.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
        {
            return None;
        }
        Some(self.root.join(entry))
    }

    /// Creates the empty file for note `name`, returning its read/write handle.
    fn create_file(&self, name: &str) -> Result<(PathBuf, File)> {
        let path = self
            .entry_path(name)
            .map(|_| self.root.join(Self::file_name_for(name)))
            .ok_or_else(|| VaultError::InvalidName {
                name: name.to_string(),
            })?;

        if path.exists() {
            tracing::debug!(path = ?path, "note already exists");
            return Err(VaultError::AlreadyExists { path });
        }

        // create_new closes the gap between the check above and creation
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => VaultError::AlreadyExists { path: path.clone() },
                _ => VaultError::io(&path, e),
            })?;

        tracing::debug!(path = ?path, "note created");
        Ok((path, file))
    }
}

impl NoteStore for VaultStore {
    fn list_notes(&self) -> Result<Vec<NoteFile>> {
        let _span = tracing::debug_span!("vault_list_notes", root = ?self.root).entered();

        let entries = fs::read_dir(&self.root).map_err(|e| VaultError::io(&self.root, e))?;

        let mut notes: Vec<NoteFile> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let metadata = entry.metadata().ok()?;
                if metadata.is_dir() {
                    return None;
                }

                let modified: DateTime<Local> = metadata.modified().ok()?.into();
                let name = entry.file_name().to_string_lossy().into_owned();
                Some(NoteFile::new(name, entry.path(), modified))
            })
            .collect();

        notes.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    fn create_note(&self, name: &str) -> Result<NoteFile> {
        let _span = tracing::debug_span!("vault_create_note", name = %name).entered();

        let (path, file) = self.create_file(name)?;
        let modified: DateTime<Local> = file
            .metadata()
            .and_then(|m| m.modified())
            .map_or_else(|_| Local::now(), Into::into);

        Ok(NoteFile::new(Self::file_name_for(name), path, modified))
    }

    fn create_for_edit(&self, name: &str) -> Result<ActiveDocument> {
        let _span = tracing::debug_span!("vault_create_for_edit", name = %name).entered();

        let (path, file) = self.create_file(name)?;
        Ok(ActiveDocument::new(path, String::new(), Box::new(file)))
    }

    fn open_for_edit(&self, file_name: &str) -> Result<ActiveDocument> {
        let _span = tracing::debug_span!("vault_open_for_edit", file_name = %file_name).entered();

        let path = self.entry_path(file_name).ok_or_else(|| VaultError::NotFound {
            path: self.root.join(file_name),
        })?;

        if path.is_dir() {
            return Err(VaultError::NotFound { path });
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => VaultError::NotFound { path: path.clone() },
                _ => VaultError::io(&path, e),
            })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| VaultError::io(&path, e))?;

        tracing::debug!(path = ?path, bytes = content.len(), "note opened");
        Ok(ActiveDocument::new(path, content, Box::new(file)))
    }

    fn save_and_close(&self, document: ActiveDocument) -> std::result::Result<(), SaveFailure> {
        let (path, content, mut handle) = document.into_parts();
        let _span = tracing::debug_span!("vault_save_and_close", path = ?path, bytes = content.len()).entered();

        if let Err(e) = handle.truncate() {
            tracing::warn!(error = %e, "truncate failed, note unchanged");
            return Err(SaveFailure {
                error: VaultError::io(&path, e),
                document: ActiveDocument::new(path, content, handle),
            });
        }

        if let Err(e) = write_from_start(handle.as_mut(), &content) {
            tracing::error!(error = %e, "write failed after truncation, note on disk is empty");
            return Err(SaveFailure {
                error: VaultError::Truncated { path: path.clone(), source: e },
                document: ActiveDocument::new(path, content, handle),
            });
        }

        handle.close().map_err(|e| {
            tracing::error!(error = %e, "flushing note failed");
            SaveFailure {
                error: VaultError::Truncated { path: path.clone(), source: e },
                document: reopen_after_failed_close(&path, content),
            }
        })?;

        tracing::debug!("note saved");
        Ok(())
    }

    fn discard_edit(&self, document: ActiveDocument) {
        tracing::debug!(path = ?document.path(), "discarding edit");
        drop(document);
    }
}

/// Rewinds `handle` and writes `content` in full.
fn write_from_start(handle: &mut dyn NoteHandle, content: &str) -> io::Result<()> {
    handle.seek(SeekFrom::Start(0))?;
    handle.write_all(content.as_bytes())?;
    handle.flush()
}

/// Builds a document to hand back after `close` consumed the handle.
///
/// The note is reopened so a retried save has a handle to write through. If
/// that fails too, the retry will fail with a fresh error through a handle
/// that reports one.
fn reopen_after_failed_close(path: &Path, content: String) -> ActiveDocument {
    let handle: Box<dyn NoteHandle> = match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => Box::new(file),
        Err(e) => Box::new(BrokenHandle(e.kind())),
    };
    ActiveDocument::new(path, content, handle)
}

/// Handle standing in for a note that could not be reopened.
#[derive(Debug)]
struct BrokenHandle(io::ErrorKind);

impl BrokenHandle {
    fn error(&self) -> io::Error {
        io::Error::new(self.0, "note could not be reopened")
    }
}

impl Write for BrokenHandle {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(self.error())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(self.error())
    }
}

impl Seek for BrokenHandle {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(self.error())
    }
}

impl NoteHandle for BrokenHandle {
    fn truncate(&mut self) -> io::Result<()> {
        Err(self.error())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> (tempfile::TempDir, VaultStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = VaultStore::open(tmp.path().join("vault")).unwrap();
        (tmp, store)
    }

    fn read(store: &VaultStore, file_name: &str) -> String {
        fs::read_to_string(store.root().join(file_name)).unwrap()
    }

    /// Wraps a real file but fails every write.
    #[derive(Debug)]
    struct FailingWrites(File);

    impl Write for FailingWrites {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for FailingWrites {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.0.seek(pos)
        }
    }

    impl NoteHandle for FailingWrites {
        fn truncate(&mut self) -> io::Result<()> {
            self.0.set_len(0)
        }

        fn close(self: Box<Self>) -> io::Result<()> {
            Ok(())
        }
    }

    /// Wraps a real file but fails to close, optionally deleting the note first.
    #[derive(Debug)]
    struct FailingClose {
        file: File,
        remove_on_close: Option<PathBuf>,
    }

    impl Write for FailingClose {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.file.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.file.flush()
        }
    }

    impl Seek for FailingClose {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.file.seek(pos)
        }
    }

    impl NoteHandle for FailingClose {
        fn truncate(&mut self) -> io::Result<()> {
            self.file.set_len(0)
        }

        fn close(self: Box<Self>) -> io::Result<()> {
            if let Some(path) = &self.remove_on_close {
                fs::remove_file(path)?;
            }
            Err(io::Error::other("sync failed"))
        }
    }

    fn failing_close_doc(path: &Path, content: &str, remove: bool) -> ActiveDocument {
        let file = OpenOptions::new().read(true).write(true).open(path).unwrap();
        let handle = FailingClose {
            file,
            remove_on_close: remove.then(|| path.to_path_buf()),
        };
        ActiveDocument::new(path, content.to_string(), Box::new(handle))
    }

    #[test]
    fn open_creates_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("a").join("vault");
        let store = VaultStore::open(root.clone()).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root);
    }

    #[test]
    fn saved_content_round_trips() {
        let (_tmp, store) = vault();
        let content = "# Groceries\n\n- eggs\n- café au lait\n";

        let note = store.create_note("groceries").unwrap();
        let mut doc = store.open_for_edit(&note.name).unwrap();
        assert_eq!(doc.content, "");

        doc.content = content.to_string();
        store.save_and_close(doc).unwrap();

        let reopened = store.open_for_edit("groceries.md").unwrap();
        assert_eq!(reopened.content, content);
    }

    #[test]
    fn shorter_save_leaves_no_trailing_bytes() {
        let (_tmp, store) = vault();
        store.create_note("todo").unwrap();

        let mut doc = store.open_for_edit("todo.md").unwrap();
        doc.content = "a much longer first draft".to_string();
        store.save_and_close(doc).unwrap();

        let mut doc = store.open_for_edit("todo.md").unwrap();
        doc.content = "short".to_string();
        store.save_and_close(doc).unwrap();

        assert_eq!(read(&store, "todo.md"), "short");
    }

    #[test]
    fn create_never_clobbers_existing_note() {
        let (_tmp, store) = vault();
        fs::write(store.root().join("todo.md"), "keep me").unwrap();

        let err = store.create_note("todo").unwrap_err();
        assert!(matches!(err, VaultError::AlreadyExists { .. }));

        assert_eq!(store.open_for_edit("todo.md").unwrap().content, "keep me");
    }

    #[test]
    fn create_rejects_names_outside_the_vault() {
        let (_tmp, store) = vault();
        for name in ["", "   ", ".", "..", "../escape", "nested/note", "back\\slash"] {
            let err = store.create_note(name).unwrap_err();
            assert!(
                matches!(err, VaultError::InvalidName { .. }),
                "expected InvalidName for {name:?}, got {err:?}"
            );
        }
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn discard_leaves_disk_unchanged() {
        let (_tmp, store) = vault();
        fs::write(store.root().join("draft.md"), "original").unwrap();

        let mut doc = store.open_for_edit("draft.md").unwrap();
        doc.content.push_str(" with unsaved edits");
        store.discard_edit(doc);

        assert_eq!(read(&store, "draft.md"), "original");
    }

    #[test]
    fn open_missing_note_is_not_found() {
        let (_tmp, store) = vault();
        let err = store.open_for_edit("ghost.md").unwrap_err();
        assert!(matches!(err, VaultError::NotFound { .. }));
    }

    #[test]
    fn open_directory_is_not_found() {
        let (_tmp, store) = vault();
        fs::create_dir(store.root().join("archive")).unwrap();
        let err = store.open_for_edit("archive").unwrap_err();
        assert!(matches!(err, VaultError::NotFound { .. }));
    }

    #[test]
    fn open_non_utf8_note_is_io_error() {
        let (_tmp, store) = vault();
        fs::write(store.root().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();
        let err = store.open_for_edit("binary.md").unwrap_err();
        assert!(matches!(err, VaultError::Io { .. }));
    }

    #[test]
    fn listing_is_sorted_and_skips_directories() {
        let (_tmp, store) = vault();
        store.create_note("todo").unwrap();
        store.create_note("alpha").unwrap();
        fs::write(store.root().join("plain.txt"), "x").unwrap();
        fs::create_dir(store.root().join("subdir")).unwrap();

        let names: Vec<String> = store
            .list_notes()
            .unwrap()
            .into_iter()
            .map(|note| note.name)
            .collect();

        assert_eq!(names, vec!["alpha.md", "plain.txt", "todo.md"]);
    }

    #[test]
    fn listing_missing_root_is_io_error() {
        let (_tmp, store) = vault();
        fs::remove_dir(store.root()).unwrap();
        assert!(matches!(store.list_notes(), Err(VaultError::Io { .. })));
    }

    #[test]
    fn write_failure_after_truncation_is_reported_as_truncated() {
        let (_tmp, store) = vault();
        let path = store.root().join("journal.md");
        fs::write(&path, "yesterday").unwrap();

        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        let doc = ActiveDocument::new(&path, "today".to_string(), Box::new(FailingWrites(file)));

        let failure = store.save_and_close(doc).unwrap_err();
        assert!(failure.error.is_data_loss());
        assert!(matches!(failure.error, VaultError::Truncated { .. }));
        assert_eq!(failure.document.content, "today");
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        // the returned document is still usable once the handle works again
        let (path, content, _) = failure.document.into_parts();
        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        store
            .save_and_close(ActiveDocument::new(&path, content, Box::new(file)))
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "today");
    }

    #[test]
    fn failed_truncate_is_a_clean_io_error() {
        let (_tmp, store) = vault();
        let path = store.root().join("locked.md");
        fs::write(&path, "intact").unwrap();

        // read-only handles cannot be truncated
        let file = File::open(&path).unwrap();
        let doc = ActiveDocument::new(&path, "new".to_string(), Box::new(file));

        let failure = store.save_and_close(doc).unwrap_err();
        assert!(matches!(failure.error, VaultError::Io { .. }));
        assert!(!failure.error.is_data_loss());
        assert_eq!(fs::read_to_string(&path).unwrap(), "intact");
    }

    #[test]
    fn close_failure_hands_back_a_reopened_document() {
        let (_tmp, store) = vault();
        let path = store.root().join("plan.md");
        fs::write(&path, "draft").unwrap();

        let failure = store
            .save_and_close(failing_close_doc(&path, "final", false))
            .unwrap_err();
        assert!(matches!(failure.error, VaultError::Truncated { .. }));
        assert_eq!(failure.document.content, "final");

        store.save_and_close(failure.document).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "final");
    }

    #[test]
    fn close_failure_on_a_vanished_note_keeps_the_content() {
        let (_tmp, store) = vault();
        let path = store.root().join("gone.md");
        fs::write(&path, "draft").unwrap();

        let failure = store
            .save_and_close(failing_close_doc(&path, "final", true))
            .unwrap_err();
        assert!(matches!(failure.error, VaultError::Truncated { .. }));

        // the note could not be reopened, so the retry fails before writing
        let retry = store.save_and_close(failure.document).unwrap_err();
        assert!(matches!(retry.error, VaultError::Io { .. }));
        assert_eq!(retry.document.content, "final");
        assert!(!path.exists());
    }

    #[test]
    fn created_note_is_edited_through_its_creating_handle() {
        let (_tmp, store) = vault();

        let mut doc = store.create_for_edit("fresh").unwrap();
        assert_eq!(doc.file_name(), "fresh.md");
        assert_eq!(doc.content, "");
        assert_eq!(read(&store, "fresh.md"), "");

        doc.content = "first line".to_string();
        store.save_and_close(doc).unwrap();
        assert_eq!(read(&store, "fresh.md"), "first line");

        let err = store.create_for_edit("fresh").unwrap_err();
        assert!(matches!(err, VaultError::AlreadyExists { .. }));
        assert!(matches!(
            store.create_for_edit("../escape"),
            Err(VaultError::InvalidName { .. })
        ));
    }
}
