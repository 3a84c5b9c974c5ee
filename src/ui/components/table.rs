//! Table component renderer.
//!
//! Renders the note listing as a two-column table with NAME and LAST EDITED
//! columns and full-row selection highlighting.

use crate::ui::helpers::{clip, position_cursor, push_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the NAME column including its trailing gap.
const NAME_COLUMN_WIDTH: usize = 37;

/// Renders the column headers at `row` and returns the next row.
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!("{:<NAME_COLUMN_WIDTH$}{}", "NAME", "LAST EDITED"));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders one row per item starting at `row` and returns the next row.
pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single note row.
///
/// # Layout
///
/// ```text
/// NAME (up to 35 cells) [padding to 37] LAST EDITED [padding to fill line]
/// ```
///
/// The row is padded to the full width so the selection background spans the
/// terminal.
fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    let mut line = String::new();
    push_padded(&mut line, &item.name, NAME_COLUMN_WIDTH);
    line.push_str(&item.last_edited);
    push_padded(out, clip(&line, cols), cols);

    out.push_str(Theme::reset());
    row + 1
}
