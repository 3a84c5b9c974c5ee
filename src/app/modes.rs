//! Interaction modes of the application.
//!
//! The application is always in exactly one [`Mode`]. Each variant owns the
//! data that only exists while it is active: the listing snapshot, the name
//! being typed, or the open document. Leaving a mode drops its data, so an
//! open document and a name prompt can never coexist.
//!
//! # State Machine
//!
//! ```text
//!            NewNote              Confirm
//!   Idle ───────────▶ NamingNote ─────────┐
//!    │ ▲ ◀──Cancel───                     ▼
//!    │ │                               Editing ──Save/Cancel──▶ Idle
//!    │ └──Cancel── Listing ──Confirm──────▲
//!    └──ShowList──▶
//! ```

use crate::app::editor::Editor;
use crate::domain::NoteFile;

/// Maximum number of characters in a new note's name.
pub const NAME_CHAR_LIMIT: usize = 156;

/// The single active interaction mode.
#[derive(Debug)]
pub enum Mode {
    /// Nothing open; the welcome screen.
    Idle,
    /// Browsing a snapshot of the vault.
    Listing(NoteList),
    /// Typing the name of a new note.
    NamingNote(PendingName),
    /// Editing an open note.
    Editing(Editor),
}

impl Mode {
    /// Returns the data-free discriminant of this mode.
    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Idle => ModeKind::Idle,
            Self::Listing(_) => ModeKind::Listing,
            Self::NamingNote(_) => ModeKind::NamingNote,
            Self::Editing(_) => ModeKind::Editing,
        }
    }
}

/// Discriminant of [`Mode`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    Listing,
    NamingNote,
    Editing,
}

/// Snapshot of the vault listing with a selection cursor.
///
/// Captured when the listing is entered and never refreshed while browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteList {
    notes: Vec<NoteFile>,
    selected: usize,
}

impl NoteList {
    /// Creates a listing with the first note selected.
    #[must_use]
    pub const fn new(notes: Vec<NoteFile>) -> Self {
        Self { notes, selected: 0 }
    }

    /// Notes in the snapshot, sorted by name.
    #[must_use]
    pub fn notes(&self) -> &[NoteFile] {
        &self.notes
    }

    /// Index of the selected note.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected note, or `None` if the vault was empty.
    #[must_use]
    pub fn selected(&self) -> Option<&NoteFile> {
        self.notes.get(self.selected)
    }

    /// Moves the selection down, wrapping to the top. Returns `false` if the
    /// listing is empty.
    pub fn move_down(&mut self) -> bool {
        if self.notes.is_empty() {
            return false;
        }
        self.selected = (self.selected + 1) % self.notes.len();
        true
    }

    /// Moves the selection up, wrapping to the bottom. Returns `false` if the
    /// listing is empty.
    pub fn move_up(&mut self) -> bool {
        if self.notes.is_empty() {
            return false;
        }
        if self.selected == 0 {
            self.selected = self.notes.len() - 1;
        } else {
            self.selected -= 1;
        }
        true
    }
}

/// Name typed for a note that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingName {
    value: String,
}

impl PendingName {
    /// Appends a character. Control characters and input past
    /// [`NAME_CHAR_LIMIT`] are ignored.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.value.chars().count() >= NAME_CHAR_LIMIT {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Removes the last character.
    pub fn pop(&mut self) -> bool {
        self.value.pop().is_some()
    }

    /// The name typed so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `true` if nothing has been typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn listing(names: &[&str]) -> NoteList {
        NoteList::new(
            names
                .iter()
                .map(|name| NoteFile::new(*name, format!("/vault/{name}"), Local::now()))
                .collect(),
        )
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut list = listing(&["a.md", "b.md", "c.md"]);

        assert!(list.move_up());
        assert_eq!(list.selected().unwrap().name, "c.md");

        assert!(list.move_down());
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn empty_listing_has_no_selection() {
        let mut list = listing(&[]);
        assert!(!list.move_down());
        assert!(!list.move_up());
        assert!(list.selected().is_none());
    }

    #[test]
    fn pending_name_is_capped() {
        let mut name = PendingName::default();
        for _ in 0..NAME_CHAR_LIMIT {
            assert!(name.push('x'));
        }
        assert!(!name.push('y'));
        assert_eq!(name.as_str().len(), NAME_CHAR_LIMIT);
    }

    #[test]
    fn pending_name_ignores_control_characters() {
        let mut name = PendingName::default();
        assert!(!name.push('\n'));
        assert!(!name.push('\t'));
        assert!(name.is_empty());
        assert!(!name.pop());
    }
}
