//! In-memory editing of an open note.
//!
//! [`Editor`] wraps the [`ActiveDocument`] while the application is in editing
//! mode and applies text edits and cursor movement to its content. Nothing
//! here touches the file; the handle is only used when the document is saved
//! or discarded.
//!
//! The cursor is a byte offset into the content that always sits on a char
//! boundary.

use crate::app::intents::{Direction, TextEdit};
use crate::storage::ActiveDocument;

/// Maximum number of characters in a note typed through the editor.
pub const CONTENT_CHAR_LIMIT: usize = 10_000;

/// An open note plus editing state.
#[derive(Debug)]
pub struct Editor {
    document: ActiveDocument,
    cursor: usize,
    dirty: bool,
}

impl Editor {
    /// Starts editing with the cursor at the end of the content.
    #[must_use]
    pub fn new(document: ActiveDocument) -> Self {
        let cursor = document.content.len();
        Self {
            document,
            cursor,
            dirty: false,
        }
    }

    /// Resumes editing a document handed back by a failed save.
    ///
    /// The document still differs from disk, so it stays dirty.
    #[must_use]
    pub fn resume(document: ActiveDocument, cursor: usize) -> Self {
        let mut editor = Self::new(document);
        editor.cursor = clamp_to_boundary(&editor.document.content, cursor);
        editor.dirty = true;
        editor
    }

    /// The open document.
    #[must_use]
    pub const fn document(&self) -> &ActiveDocument {
        &self.document
    }

    /// Current text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.document.content
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if the content changed since the note was opened.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Gives up the document, returning it with the cursor offset.
    #[must_use]
    pub fn into_parts(self) -> (ActiveDocument, usize) {
        (self.document, self.cursor)
    }

    /// Returns the cursor as zero-based `(line, column)`, counted in chars.
    #[must_use]
    pub fn cursor_position(&self) -> (usize, usize) {
        let (line, before) = self.cursor_line();
        (line, before.chars().count())
    }

    /// Returns the cursor's zero-based line and the text before it on that line.
    #[must_use]
    pub fn cursor_line(&self) -> (usize, &str) {
        let before = &self.content()[..self.cursor];
        let line = before.matches('\n').count();
        (line, &before[self.line_start()..])
    }

    /// Applies a text edit. Returns `true` if anything changed.
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => self.insert(c),
            TextEdit::Backspace => self.backspace(),
            TextEdit::Delete => self.delete(),
            TextEdit::Home => self.set_cursor(self.line_start()),
            TextEdit::End => self.set_cursor(self.line_end()),
        }
    }

    /// Moves the cursor. Returns `true` if it moved.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Left => match self.prev_boundary() {
                Some(pos) => self.set_cursor(pos),
                None => false,
            },
            Direction::Right => match self.next_boundary() {
                Some(pos) => self.set_cursor(pos),
                None => false,
            },
            Direction::Up => {
                let start = self.line_start();
                if start == 0 {
                    return false;
                }
                let column = self.column();
                let prev_start = self.content()[..start - 1].rfind('\n').map_or(0, |i| i + 1);
                self.set_cursor(self.offset_in_line(prev_start, column))
            }
            Direction::Down => {
                let end = self.line_end();
                if end == self.content().len() {
                    return false;
                }
                let column = self.column();
                self.set_cursor(self.offset_in_line(end + 1, column))
            }
        }
    }

    /// Inserts `c` at the cursor unless the content is at its limit.
    pub fn insert(&mut self, c: char) -> bool {
        if self.content().chars().count() >= CONTENT_CHAR_LIMIT {
            return false;
        }
        self.document.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.dirty = true;
        true
    }

    fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.document.content.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        self.dirty = true;
        true
    }

    fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.document.content.replace_range(self.cursor..next, "");
        self.dirty = true;
        true
    }

    fn set_cursor(&mut self, pos: usize) -> bool {
        let moved = pos != self.cursor;
        self.cursor = pos;
        moved
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content()[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content()[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self) -> usize {
        self.content()[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.content()[self.cursor..]
            .find('\n')
            .map_or(self.content().len(), |i| self.cursor + i)
    }

    fn column(&self) -> usize {
        self.content()[self.line_start()..self.cursor].chars().count()
    }

    /// Byte offset of `column` within the line starting at `line_start`,
    /// clamped to the line's end.
    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line = &self.content()[line_start..];
        let line = line.find('\n').map_or(line, |end| &line[..end]);
        line.char_indices()
            .nth(column)
            .map_or(line_start + line.len(), |(i, _)| line_start + i)
    }
}

/// Moves `pos` back to the nearest char boundary within `text`.
fn clamp_to_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
