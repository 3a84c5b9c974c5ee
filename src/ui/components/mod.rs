//! Composable UI component renderers.
//!
//! Each component appends one part of the screen to the frame buffer and
//! returns where the next part starts.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`table`]: Note listing with NAME and LAST EDITED columns
//! - [`input`]: Name input box for a new note
//! - [`editor`]: Visible window of the open note
//! - [`empty`]: Welcome and empty-vault messages
//! - [`status`]: Result of the last operation
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Body]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod editor;
mod empty;
mod footer;
mod header;
mod input;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use editor::render_editor;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_name_input;
use status::render_status;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full layout for `vm`.
///
/// Returns the 1-indexed screen position of the text cursor when the body
/// takes text input.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    let cursor = match &vm.body {
        Body::Empty(empty) => {
            render_empty_state(out, current_row, empty, theme, cols);
            None
        }
        Body::Notes(table) => {
            current_row = render_table_headers(out, current_row, theme);
            render_table_rows(out, current_row, &table.items, theme, cols);
            None
        }
        Body::NameInput(input) => {
            let (_, cursor) = render_name_input(out, current_row, input, theme, cols);
            Some(cursor)
        }
        Body::Editor(view) => render_editor(out, current_row, view, theme, cols),
    };

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let status_row = footer_row.saturating_sub(2);

    render_status(out, status_row, vm.status.as_ref(), theme, cols);
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);

    cursor
}
