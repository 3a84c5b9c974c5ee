//! Name input box renderer.
//!
//! Renders the prompt for a new note's name as a bordered box with a label
//! above and the resulting file name below.

use crate::app::state::INPUT_BOX_MARGIN;
use crate::ui::helpers::{clip, position_cursor, push_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBox;

/// Renders the input box starting at `row`.
///
/// Returns the next free row and the screen position of the text cursor.
///
/// # Layout
///
/// ```text
/// [margin] Name
/// [margin] ┌──────────────────┐
/// [margin] │ todo             │
/// [margin] └──────────────────┘
/// [margin] Creates todo.md
/// ```
pub fn render_name_input(
    out: &mut String,
    row: usize,
    input: &InputBox,
    theme: &Theme,
    cols: usize,
) -> (usize, (usize, usize)) {
    let margin = " ".repeat(INPUT_BOX_MARGIN);
    let inner_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2).saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.input_border));
    out.push_str(&input.label);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.input_border));
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let (text, text_color) = if input.value.is_empty() {
        (clip(&input.placeholder, text_width), &theme.colors.text_dim)
    } else {
        (input.value.as_str(), &theme.colors.text_normal)
    };

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.input_border));
    out.push_str("│ ");
    out.push_str(&Theme::fg(text_color));
    push_padded(out, text, inner_width.saturating_sub(1));
    out.push_str(&Theme::fg(&theme.colors.input_border));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 3, 1);
    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.input_border));
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    if let Some(hint) = &input.hint {
        position_cursor(out, row + 4, 1);
        out.push_str(&margin);
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(clip(hint, inner_width));
        out.push_str(Theme::reset());
    }

    let cursor = (row + 2, INPUT_BOX_MARGIN + 3 + input.cursor_col);
    (row + 5, cursor)
}
