//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready data only: names are
//! already truncated, dates formatted, and editor text windowed to the
//! viewport.
//!
//! # Example
//!
//! ```rust
//! use hackpad::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Hackpad ".to_string() },
//!     body: Body::Empty(EmptyState {
//!         message: "Welcome to Hackpad!".to_string(),
//!         subtitle: String::new(),
//!     }),
//!     status: None,
//!     footer: FooterInfo { keybindings: "Ctrl+Q: quit".to_string() },
//! };
//! assert!(vm.status.is_none());
//! ```

use crate::app::StatusKind;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Mode-specific content between the header and the status line.
    pub body: Body,

    /// Message from the last handled intent.
    pub status: Option<StatusLine>,

    /// Footer information (keybindings).
    pub footer: FooterInfo,
}

/// Content area of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Centered message: the welcome screen or an empty vault.
    Empty(EmptyState),
    /// The note listing.
    Notes(NoteTable),
    /// The prompt for a new note's name.
    NameInput(InputBox),
    /// The open note.
    Editor(EditorView),
}

/// Visible window of the note listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTable {
    /// Rows that fit on screen.
    pub items: Vec<DisplayItem>,

    /// Index of the selected row within `items`.
    pub selected_index: usize,
}

/// Display information for a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// File name, truncated to the name column.
    pub name: String,

    /// Formatted modification time, e.g. "Last edited: Jan 2, 2006 at 3:04pm".
    pub last_edited: String,

    /// Whether this row is selected.
    pub is_selected: bool,
}

/// Text input box for the note name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBox {
    /// Label above the box.
    pub label: String,

    /// Visible tail of the typed text.
    pub value: String,

    /// Shown dimmed while `value` is empty.
    pub placeholder: String,

    /// Line below the box, e.g. the file that will be created.
    pub hint: Option<String>,

    /// Cursor column within `value`, in chars.
    pub cursor_col: usize,
}

/// Visible window of the open note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    /// Lines clipped to the viewport, tabs shown as spaces.
    pub lines: Vec<String>,

    /// Shown dimmed while the note is empty.
    pub placeholder: Option<String>,

    /// Cursor `(row, col)` relative to the first visible line and column.
    /// `None` when the viewport has no room for text.
    pub cursor: Option<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Ctrl+N: new note  Ctrl+Q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Your vault is empty").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Status line above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}
