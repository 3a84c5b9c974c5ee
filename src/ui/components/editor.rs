//! Editor component renderer.

use crate::ui::helpers::{position_cursor, push_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EditorView;

/// Renders the visible lines of the open note starting at `row`.
///
/// Returns the screen position of the text cursor, if it is on screen.
pub fn render_editor(out: &mut String, row: usize, view: &EditorView, theme: &Theme, cols: usize) -> Option<(usize, usize)> {
    if let Some(placeholder) = &view.placeholder {
        position_cursor(out, row, 1);
        out.push_str(Theme::dim());
        push_line(out, placeholder, &theme.colors.text_dim, cols);
    }

    for (offset, line) in view.lines.iter().enumerate() {
        position_cursor(out, row + offset, 1);
        push_line(out, line, &theme.colors.text_normal, cols);
    }

    view.cursor.map(|(line, col)| (row + line, col + 1))
}
