//! Shared rendering utilities.
//!
//! All components append to a frame `String` instead of writing to stdout, so a
//! frame can be built, compared in tests, and written out in one call.
//!
//! Widths are measured in terminal cells with `unicode-width`, so wide CJK and
//! emoji characters take two columns. Tabs count as one cell because the
//! editor draws them as a single space.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Appends an absolute cursor move to `out`.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
///
/// ```rust
/// let mut out = String::new();
/// hackpad::ui::helpers::position_cursor(&mut out, 5, 1);
/// assert_eq!(out, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Cells taken by `c` on screen.
#[must_use]
pub fn char_width(c: char) -> usize {
    if c == '\t' {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Cells taken by `text` on screen.
///
/// ```rust
/// use hackpad::ui::helpers::display_width;
///
/// assert_eq!(display_width("todo"), 4);
/// assert_eq!(display_width("日本"), 4);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.contains('\t') {
        text.chars().map(char_width).sum()
    } else {
        text.width()
    }
}

/// Returns the longest prefix of `text` that fits in `width` cells.
#[must_use]
pub fn clip(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += char_width(c);
        if used > width {
            return &text[..i];
        }
    }
    text
}

/// Returns the longest suffix of `text` that fits in `width` cells.
#[must_use]
pub fn clip_start(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices().rev() {
        used += char_width(c);
        if used > width {
            return &text[i + c.len_utf8()..];
        }
    }
    text
}

/// Drops leading characters of `text` until at least `cells` cells are gone.
///
/// Returns the rest of the text and the number of cells actually dropped,
/// which can exceed `cells` by one when a wide character straddles the cut.
#[must_use]
pub fn skip_cells(text: &str, cells: usize) -> (&str, usize) {
    let mut dropped = 0;
    for (i, c) in text.char_indices() {
        if dropped >= cells {
            return (&text[i..], dropped);
        }
        dropped += char_width(c);
    }
    ("", dropped)
}

/// Appends `text` followed by spaces up to `width` cells.
pub fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(display_width(text))));
}

/// Appends `text` centered in a line of `cols`, padded on both sides with the
/// currently active style.
///
/// Text wider than the line is clipped. When the padding cannot be split
/// evenly, the right side gets the extra space.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = clip(text, cols);
    let len = display_width(text);
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Appends a full-width line of `text` in `color`, clipped and padded to `cols`.
pub fn push_line(out: &mut String, text: &str, color: &str, cols: usize) {
    let text = clip(text, cols);
    out.push_str(&Theme::fg(color));
    push_padded(out, text, cols);
    out.push_str(Theme::reset());
}
