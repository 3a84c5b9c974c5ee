//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the UI: the active [`Mode`]
//! with its data, the status line and the theme. It is mutated only by
//! [`handle_intent`](super::handle_intent); rendering reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use hackpad::app::{AppState, ModeKind};
//! use hackpad::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! assert_eq!(state.mode().kind(), ModeKind::Idle);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, " Hackpad ");
//! ```

use super::editor::Editor;
use super::modes::{Mode, NoteList, PendingName};
use crate::domain::NoteFile;
use crate::storage::VaultStore;
use crate::ui::helpers::{clip, clip_start, display_width, skip_cells};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DisplayItem, EditorView, EmptyState, FooterInfo, HeaderInfo, InputBox, NoteTable,
    StatusLine, UIViewModel,
};

/// Rows taken by everything but the editor text: blank line, header, two
/// borders, status line and footer.
const CHROME_ROWS: usize = 6;

/// Horizontal margin on each side of the name input box.
pub(crate) const INPUT_BOX_MARGIN: usize = 5;

/// Severity of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Confirmation of a completed operation.
    Info,
    /// A rejected operation; nothing on disk changed.
    Error,
    /// A failed save that may have emptied the note on disk.
    DataLoss,
}

/// One-line message shown above the footer until the next intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    /// Builds the message for a rejected vault operation.
    #[must_use]
    pub fn from_error(error: &crate::domain::VaultError) -> Self {
        let kind = if error.is_data_loss() {
            StatusKind::DataLoss
        } else {
            StatusKind::Error
        };
        Self {
            kind,
            text: error.to_string(),
        }
    }
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Current interaction mode. Replaced wholesale by each transition.
    pub(crate) mode: Mode,

    /// Message from the last handled intent, if any.
    status: Option<StatusMessage>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle application state.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self {
            mode: Mode::Idle,
            status: None,
            theme,
        }
    }

    /// The active mode.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The current status message.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Clears the status message. Returns `true` if one was shown.
    pub(crate) fn clear_status(&mut self) -> bool {
        self.status.take().is_some()
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// Pure: the same state and viewport always give the same view model.
    ///
    /// # Layout
    ///
    /// ```text
    /// [blank line]
    /// [Header]
    /// [Border]
    /// [Body: welcome | note table | name input | editor]
    /// [Status]
    /// [Border]
    /// [Footer]
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.mode {
            Mode::Idle => Body::Empty(EmptyState {
                message: "Welcome to Hackpad!".to_string(),
                subtitle: "Press Ctrl+N to create a note or Ctrl+L to browse your vault"
                    .to_string(),
            }),
            Mode::Listing(list) if list.notes().is_empty() => Body::Empty(EmptyState {
                message: "Your vault is empty".to_string(),
                subtitle: "Press Esc, then Ctrl+N to write your first note".to_string(),
            }),
            Mode::Listing(list) => Body::Notes(Self::compute_note_table(list, rows)),
            Mode::NamingNote(pending) => Body::NameInput(Self::compute_input_box(pending, cols)),
            Mode::Editing(editor) => Body::Editor(Self::compute_editor_view(editor, rows, cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            status: self.status.as_ref().map(|status| StatusLine {
                kind: status.kind,
                text: status.text.clone(),
            }),
            footer: self.compute_footer(),
        }
    }

    /// Windows the listing around the selection.
    ///
    /// Reserves one more row than the editor for the column headers.
    fn compute_note_table(list: &NoteList, rows: usize) -> NoteTable {
        let notes = list.notes();
        let selected = list.selected_index();
        let available_rows = rows.saturating_sub(CHROME_ROWS + 1);

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(notes.len());

        if visible_end - visible_start < available_rows && notes.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let items = notes[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, note)| Self::compute_display_item(note, visible_start + offset == selected))
            .collect();

        NoteTable {
            items,
            selected_index: selected.saturating_sub(visible_start),
        }
    }

    fn compute_display_item(note: &NoteFile, is_selected: bool) -> DisplayItem {
        const NAME_WIDTH: usize = 35;

        let name = if display_width(&note.name) > NAME_WIDTH {
            format!("{}...", clip(&note.name, NAME_WIDTH - 3))
        } else {
            note.name.clone()
        };

        DisplayItem {
            name,
            last_edited: note.last_edited(),
            is_selected,
        }
    }

    fn compute_input_box(pending: &PendingName, cols: usize) -> InputBox {
        // Box borders plus one space of padding on each side.
        let text_width = cols
            .saturating_sub(INPUT_BOX_MARGIN * 2)
            .saturating_sub(4);
        let value = pending.as_str();
        let visible = clip_start(value, text_width);

        InputBox {
            label: "Name".to_string(),
            value: visible.to_string(),
            placeholder: "Enter file name".to_string(),
            hint: (!pending.is_empty())
                .then(|| format!("Creates {}", VaultStore::file_name_for(value))),
            cursor_col: display_width(visible),
        }
    }

    /// Scrolls the editor so the cursor stays visible.
    fn compute_editor_view(editor: &Editor, rows: usize, cols: usize) -> EditorView {
        let height = rows.saturating_sub(CHROME_ROWS);
        if editor.content().is_empty() {
            return EditorView {
                lines: vec![],
                placeholder: Some("Start writing your note...".to_string()),
                cursor: (height > 0 && cols > 0).then_some((0, 0)),
            };
        }

        let (line, before) = editor.cursor_line();
        let col = display_width(before);
        let top = line.saturating_sub(height.saturating_sub(1));
        let (_, left) = skip_cells(before, col.saturating_sub(cols.saturating_sub(1)));

        let lines = editor
            .content()
            .split('\n')
            .skip(top)
            .take(height)
            .map(|text| {
                let (rest, _) = skip_cells(text, left);
                clip(rest, cols).replace('\t', " ")
            })
            .collect();

        EditorView {
            lines,
            placeholder: None,
            cursor: (height > 0 && cols > 0).then_some((line - top, col - left)),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.mode {
            Mode::Idle => " Hackpad ".to_string(),
            Mode::Listing(list) => format!(" Your Notes ({}) ", list.notes().len()),
            Mode::NamingNote(_) => " New Note ".to_string(),
            Mode::Editing(editor) if editor.is_dirty() => {
                format!(" {} [+] ", editor.document().file_name())
            }
            Mode::Editing(editor) => format!(" {} ", editor.document().file_name()),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.mode {
            Mode::Idle => "Ctrl+N: new note  Ctrl+L: list notes  Ctrl+Q: quit",
            Mode::Listing(_) => "↑/↓: navigate  Enter: open  Esc: back  Ctrl+Q: quit",
            Mode::NamingNote(_) => "Enter: create  Esc: cancel  Ctrl+Q: quit",
            Mode::Editing(_) => "Ctrl+S: save  Esc: discard changes  Ctrl+Q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
