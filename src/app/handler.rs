//! Intent handling and mode transitions.
//!
//! [`handle_intent`] is the only place the application mode changes. It moves
//! the current [`Mode`] out of the state, computes the next one for the given
//! intent (calling the [`NoteStore`] where the transition needs disk access)
//! and puts the result back. A vault failure rejects the transition: the mode
//! that was taken out is put back unchanged and the error becomes the status
//! line.
//!
//! # Example
//!
//! ```rust
//! use hackpad::app::{handle_intent, AppState, Intent, ModeKind, Outcome};
//! use hackpad::storage::VaultStore;
//! use hackpad::ui::Theme;
//!
//! let dir = tempfile::tempdir()?;
//! let store = VaultStore::open(dir.path().join("vault"))?;
//! let mut state = AppState::new(Theme::default());
//!
//! let outcome = handle_intent(&mut state, &store, &Intent::NewNote);
//! assert!(matches!(outcome, Outcome::Changed));
//! assert_eq!(state.mode().kind(), ModeKind::NamingNote);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::editor::Editor;
use super::intents::{Direction, Intent, TextEdit};
use super::modes::{Mode, NoteList, PendingName};
use super::state::{AppState, StatusMessage};
use crate::domain::VaultError;
use crate::storage::{NoteStore, SaveFailure};

/// Result of handling one intent.
#[derive(Debug)]
pub enum Outcome {
    /// The state changed and should be re-rendered.
    Changed,
    /// Nothing changed.
    Unchanged,
    /// A vault operation failed; the mode is unchanged and the error is shown
    /// in the status line.
    Rejected(VaultError),
    /// The user asked to exit. Any open document has been discarded.
    Quit,
}

impl Outcome {
    /// Returns `true` if the screen needs to be redrawn.
    #[must_use]
    pub const fn should_render(&self) -> bool {
        matches!(self, Self::Changed | Self::Rejected(_))
    }
}

/// Applies `intent` to `state`, calling `store` for any vault work.
///
/// Every intent in every mode yields exactly one resulting mode; pairs without
/// a transition leave the mode as it was. The status message from the previous
/// intent is cleared first.
pub fn handle_intent<S: NoteStore + ?Sized>(state: &mut AppState, store: &S, intent: &Intent) -> Outcome {
    let _span = tracing::debug_span!("handle_intent", intent = ?intent, mode = ?state.mode.kind()).entered();

    let had_status = state.clear_status();

    if matches!(intent, Intent::Quit) {
        if let Mode::Editing(editor) = std::mem::replace(&mut state.mode, Mode::Idle) {
            let (document, _) = editor.into_parts();
            tracing::debug!(path = %document.path().display(), "discarding open note on quit");
            store.discard_edit(document);
        }
        return Outcome::Quit;
    }

    let mode = std::mem::replace(&mut state.mode, Mode::Idle);
    let (next, outcome) = match mode {
        Mode::Idle => on_idle(store, *intent),
        Mode::NamingNote(pending) => on_naming(state, store, pending, *intent),
        Mode::Listing(list) => on_listing(store, list, *intent),
        Mode::Editing(editor) => on_editing(state, store, editor, *intent),
    };
    state.mode = next;

    match &outcome {
        Outcome::Rejected(error) => {
            if error.is_data_loss() {
                tracing::error!(error = %error, "save failed after truncation");
            } else {
                tracing::warn!(error = %error, "vault operation rejected");
            }
            state.set_status(StatusMessage::from_error(error));
        }
        Outcome::Changed => {
            tracing::debug!(mode = ?state.mode.kind(), "state changed");
        }
        Outcome::Unchanged | Outcome::Quit => {}
    }

    if had_status && matches!(outcome, Outcome::Unchanged) {
        return Outcome::Changed;
    }
    outcome
}

const fn changed(changed: bool) -> Outcome {
    if changed {
        Outcome::Changed
    } else {
        Outcome::Unchanged
    }
}

fn on_idle<S: NoteStore + ?Sized>(store: &S, intent: Intent) -> (Mode, Outcome) {
    match intent {
        Intent::NewNote => (Mode::NamingNote(PendingName::default()), Outcome::Changed),
        Intent::ShowList => match store.list_notes() {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "listing vault");
                (Mode::Listing(NoteList::new(notes)), Outcome::Changed)
            }
            Err(error) => (Mode::Idle, Outcome::Rejected(error)),
        },
        _ => (Mode::Idle, Outcome::Unchanged),
    }
}

fn on_naming<S: NoteStore + ?Sized>(
    state: &mut AppState,
    store: &S,
    mut pending: PendingName,
    intent: Intent,
) -> (Mode, Outcome) {
    match intent {
        Intent::TextEdit(TextEdit::Insert(c)) => {
            let outcome = changed(pending.push(c));
            (Mode::NamingNote(pending), outcome)
        }
        Intent::TextEdit(TextEdit::Backspace) => {
            let outcome = changed(pending.pop());
            (Mode::NamingNote(pending), outcome)
        }
        Intent::Confirm if pending.is_empty() => (Mode::NamingNote(pending), Outcome::Unchanged),
        Intent::Confirm => match store.create_for_edit(pending.as_str()) {
            Ok(document) => {
                state.set_status(StatusMessage::info(format!("Created {}", document.file_name())));
                (Mode::Editing(Editor::new(document)), Outcome::Changed)
            }
            Err(error) => (Mode::NamingNote(pending), Outcome::Rejected(error)),
        },
        Intent::Cancel => (Mode::Idle, Outcome::Changed),
        _ => (Mode::NamingNote(pending), Outcome::Unchanged),
    }
}

fn on_listing<S: NoteStore + ?Sized>(store: &S, mut list: NoteList, intent: Intent) -> (Mode, Outcome) {
    match intent {
        Intent::Navigate(Direction::Up) => {
            let outcome = changed(list.move_up());
            (Mode::Listing(list), outcome)
        }
        Intent::Navigate(Direction::Down) => {
            let outcome = changed(list.move_down());
            (Mode::Listing(list), outcome)
        }
        Intent::Confirm => {
            let Some(name) = list.selected().map(|note| note.name.clone()) else {
                return (Mode::Listing(list), Outcome::Unchanged);
            };
            match store.open_for_edit(&name) {
                Ok(document) => (Mode::Editing(Editor::new(document)), Outcome::Changed),
                Err(error) => (Mode::Listing(list), Outcome::Rejected(error)),
            }
        }
        Intent::Cancel => (Mode::Idle, Outcome::Changed),
        _ => (Mode::Listing(list), Outcome::Unchanged),
    }
}

fn on_editing<S: NoteStore + ?Sized>(
    state: &mut AppState,
    store: &S,
    mut editor: Editor,
    intent: Intent,
) -> (Mode, Outcome) {
    match intent {
        Intent::TextEdit(edit) => {
            let outcome = changed(editor.apply(edit));
            (Mode::Editing(editor), outcome)
        }
        Intent::Navigate(direction) => {
            let outcome = changed(editor.navigate(direction));
            (Mode::Editing(editor), outcome)
        }
        Intent::Confirm => {
            let outcome = changed(editor.insert('\n'));
            (Mode::Editing(editor), outcome)
        }
        Intent::Save => {
            let (document, cursor) = editor.into_parts();
            let file_name = document.file_name();
            match store.save_and_close(document) {
                Ok(()) => {
                    state.set_status(StatusMessage::info(format!("Saved {file_name}")));
                    (Mode::Idle, Outcome::Changed)
                }
                Err(SaveFailure { document, error }) => (
                    Mode::Editing(Editor::resume(document, cursor)),
                    Outcome::Rejected(error),
                ),
            }
        }
        Intent::Cancel => {
            let (document, _) = editor.into_parts();
            store.discard_edit(document);
            (Mode::Idle, Outcome::Changed)
        }
        _ => (Mode::Editing(editor), Outcome::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ModeKind;
    use crate::app::state::StatusKind;
    use crate::domain::{self, NoteFile};
    use crate::storage::{ActiveDocument, VaultStore};
    use crate::ui::theme::Theme;
    use std::cell::Cell;
    use std::fs;
    use std::io;

    fn setup() -> (tempfile::TempDir, VaultStore, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let store = VaultStore::open(dir.path().join("vault")).unwrap();
        (dir, store, AppState::new(Theme::default()))
    }

    fn send(state: &mut AppState, store: &dyn NoteStore, intents: &[Intent]) -> Vec<Outcome> {
        intents.iter().map(|intent| handle_intent(state, store, intent)).collect()
    }

    fn typed(text: &str) -> Vec<Intent> {
        text.chars().map(|c| Intent::TextEdit(TextEdit::Insert(c))).collect()
    }

    fn content(state: &AppState) -> &str {
        match state.mode() {
            Mode::Editing(editor) => editor.content(),
            other => panic!("expected editing, got {:?}", other.kind()),
        }
    }

    #[test]
    fn create_edit_save_then_duplicate_is_rejected() {
        let (_dir, store, mut state) = setup();
        let note = store.root().join("todo.md");

        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("todo"));
        send(&mut state, &store, &[Intent::Confirm]);
        assert_eq!(state.mode().kind(), ModeKind::Editing);
        assert_eq!(fs::read_to_string(&note).unwrap(), "");

        send(&mut state, &store, &typed("hello"));
        let outcome = handle_intent(&mut state, &store, &Intent::Save);
        assert!(matches!(outcome, Outcome::Changed));
        assert_eq!(state.mode().kind(), ModeKind::Idle);
        assert_eq!(state.status().unwrap().text, "Saved todo.md");
        assert_eq!(fs::read_to_string(&note).unwrap(), "hello");

        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("todo"));
        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);
        assert!(matches!(outcome, Outcome::Rejected(VaultError::AlreadyExists { .. })));
        assert_eq!(state.mode().kind(), ModeKind::NamingNote);
        assert_eq!(state.status().unwrap().kind, StatusKind::Error);
        assert_eq!(fs::read_to_string(&note).unwrap(), "hello");
    }

    #[test]
    fn cancel_returns_to_idle_from_every_mode() {
        let (_dir, store, mut state) = setup();
        store.create_note("a").unwrap();

        for setup_intents in [
            vec![Intent::NewNote],
            vec![Intent::ShowList],
            vec![Intent::ShowList, Intent::Confirm],
        ] {
            send(&mut state, &store, &setup_intents);
            assert_ne!(state.mode().kind(), ModeKind::Idle);
            send(&mut state, &store, &[Intent::Cancel]);
            assert_eq!(state.mode().kind(), ModeKind::Idle);
        }

        let outcome = handle_intent(&mut state, &store, &Intent::Cancel);
        assert!(matches!(outcome, Outcome::Unchanged));
    }

    #[test]
    fn cancelled_edit_leaves_disk_unchanged() {
        let (_dir, store, mut state) = setup();
        let note = store.create_note("keep").unwrap();
        fs::write(&note.path, "original").unwrap();

        send(&mut state, &store, &[Intent::ShowList, Intent::Confirm]);
        send(&mut state, &store, &typed(" edited"));
        send(&mut state, &store, &[Intent::Cancel]);

        assert_eq!(fs::read_to_string(&note.path).unwrap(), "original");
    }

    #[test]
    fn empty_name_confirm_is_a_no_op() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::NewNote]);
        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);
        assert!(matches!(outcome, Outcome::Unchanged));
        assert_eq!(state.mode().kind(), ModeKind::NamingNote);
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn invalid_name_keeps_the_typed_name() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("../escape"));
        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);

        assert!(matches!(outcome, Outcome::Rejected(VaultError::InvalidName { .. })));
        let Mode::NamingNote(pending) = state.mode() else {
            panic!("expected naming");
        };
        assert_eq!(pending.as_str(), "../escape");
    }

    #[test]
    fn listing_is_a_snapshot() {
        let (_dir, store, mut state) = setup();
        store.create_note("b").unwrap();
        send(&mut state, &store, &[Intent::ShowList]);
        store.create_note("a").unwrap();

        let Mode::Listing(list) = state.mode() else {
            panic!("expected listing");
        };
        assert_eq!(list.notes().len(), 1);

        send(&mut state, &store, &[Intent::Cancel, Intent::ShowList]);
        let Mode::Listing(list) = state.mode() else {
            panic!("expected listing");
        };
        let names: Vec<&str> = list.notes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn opening_a_vanished_note_keeps_the_listing() {
        let (_dir, store, mut state) = setup();
        let note = store.create_note("gone").unwrap();
        send(&mut state, &store, &[Intent::ShowList]);
        fs::remove_file(&note.path).unwrap();

        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);
        assert!(matches!(outcome, Outcome::Rejected(VaultError::NotFound { .. })));
        assert_eq!(state.mode().kind(), ModeKind::Listing);
    }

    #[test]
    fn confirm_on_empty_listing_is_a_no_op() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::ShowList]);
        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);
        assert!(matches!(outcome, Outcome::Unchanged));
        assert_eq!(state.mode().kind(), ModeKind::Listing);
    }

    #[test]
    fn listing_navigation_selects_and_opens() {
        let (_dir, store, mut state) = setup();
        for name in ["a", "b", "c"] {
            let note = store.create_note(name).unwrap();
            fs::write(&note.path, name).unwrap();
        }

        send(
            &mut state,
            &store,
            &[
                Intent::ShowList,
                Intent::Navigate(Direction::Down),
                Intent::Navigate(Direction::Down),
                Intent::Navigate(Direction::Down),
                Intent::Navigate(Direction::Up),
                Intent::Confirm,
            ],
        );
        assert_eq!(content(&state), "c");
    }

    #[test]
    fn editing_keys_change_only_memory() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("n"));
        send(&mut state, &store, &[Intent::Confirm]);

        send(&mut state, &store, &typed("ab"));
        send(
            &mut state,
            &store,
            &[
                Intent::Confirm,
                Intent::Navigate(Direction::Up),
                Intent::Navigate(Direction::Right),
                Intent::TextEdit(TextEdit::Backspace),
            ],
        );
        assert_eq!(content(&state), "b\n");
        assert_eq!(fs::read_to_string(store.root().join("n.md")).unwrap(), "");
    }

    #[test]
    fn mode_changing_intents_are_ignored_while_editing() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("n"));
        send(&mut state, &store, &[Intent::Confirm, Intent::NewNote, Intent::ShowList]);
        assert_eq!(state.mode().kind(), ModeKind::Editing);
    }

    #[test]
    fn quit_discards_the_open_note() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("q"));
        send(&mut state, &store, &[Intent::Confirm]);
        send(&mut state, &store, &typed("unsaved"));

        let outcome = handle_intent(&mut state, &store, &Intent::Quit);
        assert!(matches!(outcome, Outcome::Quit));
        assert!(!outcome.should_render());
        assert_eq!(state.mode().kind(), ModeKind::Idle);
        assert_eq!(fs::read_to_string(store.root().join("q.md")).unwrap(), "");
    }

    #[test]
    fn status_clears_on_next_intent() {
        let (_dir, store, mut state) = setup();
        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("x"));
        send(&mut state, &store, &[Intent::Confirm]);
        assert!(state.status().is_some());

        // A no-op still redraws once to clear the message.
        let outcome = handle_intent(&mut state, &store, &Intent::ShowList);
        assert!(matches!(outcome, Outcome::Changed));
        assert!(state.status().is_none());
        let outcome = handle_intent(&mut state, &store, &Intent::ShowList);
        assert!(matches!(outcome, Outcome::Unchanged));
    }

    /// Vault that fails a set number of opens, then a set number of saves
    /// after emptying the note the way an interrupted write would.
    struct FlakyStore {
        inner: VaultStore,
        open_failures: Cell<usize>,
        save_failures: Cell<usize>,
    }

    impl FlakyStore {
        fn new(inner: VaultStore, open_failures: usize, save_failures: usize) -> Self {
            Self {
                inner,
                open_failures: Cell::new(open_failures),
                save_failures: Cell::new(save_failures),
            }
        }

        fn take(counter: &Cell<usize>) -> bool {
            let remaining = counter.get();
            if remaining > 0 {
                counter.set(remaining - 1);
            }
            remaining > 0
        }
    }

    impl NoteStore for FlakyStore {
        fn list_notes(&self) -> domain::Result<Vec<NoteFile>> {
            self.inner.list_notes()
        }

        fn create_note(&self, name: &str) -> domain::Result<NoteFile> {
            self.inner.create_note(name)
        }

        fn create_for_edit(&self, name: &str) -> domain::Result<ActiveDocument> {
            self.inner.create_for_edit(name)
        }

        fn open_for_edit(&self, file_name: &str) -> domain::Result<ActiveDocument> {
            if Self::take(&self.open_failures) {
                return Err(VaultError::Io {
                    path: self.inner.root().join(file_name),
                    source: io::Error::other("too many open files"),
                });
            }
            self.inner.open_for_edit(file_name)
        }

        fn save_and_close(&self, document: ActiveDocument) -> std::result::Result<(), SaveFailure> {
            if !Self::take(&self.save_failures) {
                return self.inner.save_and_close(document);
            }
            let path = document.path().to_path_buf();
            fs::write(&path, "").unwrap();
            Err(SaveFailure {
                document,
                error: VaultError::Truncated {
                    path,
                    source: io::Error::other("disk full"),
                },
            })
        }

        fn discard_edit(&self, document: ActiveDocument) {
            self.inner.discard_edit(document);
        }
    }

    #[test]
    fn creating_a_note_does_not_reopen_it() {
        let (_dir, inner, mut state) = setup();
        let store = FlakyStore::new(inner, 1, 0);

        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("todo"));
        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);

        assert!(matches!(outcome, Outcome::Changed));
        assert_eq!(state.mode().kind(), ModeKind::Editing);

        send(&mut state, &store, &typed("hello"));
        send(&mut state, &store, &[Intent::Save]);
        assert_eq!(fs::read_to_string(store.inner.root().join("todo.md")).unwrap(), "hello");
    }

    #[test]
    fn failed_open_from_listing_keeps_the_listing() {
        let (_dir, inner, mut state) = setup();
        inner.create_note("todo").unwrap();
        let store = FlakyStore::new(inner, 1, 0);

        send(&mut state, &store, &[Intent::ShowList]);
        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);
        assert!(matches!(outcome, Outcome::Rejected(VaultError::Io { .. })));
        assert_eq!(state.mode().kind(), ModeKind::Listing);

        let outcome = handle_intent(&mut state, &store, &Intent::Confirm);
        assert!(matches!(outcome, Outcome::Changed));
        assert_eq!(state.mode().kind(), ModeKind::Editing);
    }

    #[test]
    fn failed_save_keeps_editing_and_retry_succeeds() {
        let (_dir, inner, mut state) = setup();
        let store = FlakyStore::new(inner, 0, 1);
        let note = store.inner.root().join("draft.md");
        send(&mut state, &store, &[Intent::NewNote]);
        send(&mut state, &store, &typed("draft"));
        send(&mut state, &store, &[Intent::Confirm]);
        send(&mut state, &store, &typed("precious"));

        let outcome = handle_intent(&mut state, &store, &Intent::Save);
        assert!(matches!(outcome, Outcome::Rejected(VaultError::Truncated { .. })));
        assert_eq!(state.status().unwrap().kind, StatusKind::DataLoss);
        assert_eq!(content(&state), "precious");
        assert_eq!(fs::read_to_string(&note).unwrap(), "");

        let outcome = handle_intent(&mut state, &store, &Intent::Save);
        assert!(matches!(outcome, Outcome::Changed));
        assert_eq!(state.mode().kind(), ModeKind::Idle);
        assert_eq!(fs::read_to_string(&note).unwrap(), "precious");
    }
}
