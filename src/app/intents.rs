//! Abstract user intents consumed by the state machine.
//!
//! Intents decouple what the user asked for from the key that asked for it.
//! The [`input`](crate::input) module produces them from terminal key events;
//! [`handle_intent`](super::handle_intent) interprets them per mode.
//!
//! # Example
//!
//! ```rust
//! use hackpad::app::{Intent, TextEdit};
//!
//! let typed: Vec<Intent> = "todo".chars().map(|c| Intent::TextEdit(TextEdit::Insert(c))).collect();
//! assert_eq!(typed.len(), 4);
//! ```

/// A user action, independent of its key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start naming a new note.
    NewNote,
    /// Browse the notes in the vault.
    ShowList,
    /// Accept the current input: create the named note, open the selected
    /// note, or break the line while editing.
    Confirm,
    /// Back out of the current mode without saving.
    Cancel,
    /// Write the open note to disk and close it.
    Save,
    /// Exit the application.
    Quit,
    /// Change the text being typed.
    TextEdit(TextEdit),
    /// Move the list selection or the editing cursor.
    Navigate(Direction),
}

/// Text changes applied to the name buffer or the open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move to the start of the line.
    Home,
    /// Move to the end of the line.
    End,
}

/// Arrow-key directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
