//! Status line renderer.

use crate::app::StatusKind;
use crate::ui::helpers::{position_cursor, push_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders the status message at `row`, or clears the line if there is none.
///
/// Data-loss warnings are bold so they stand out from ordinary errors.
pub fn render_status(out: &mut String, row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) {
    position_cursor(out, row, 1);
    let Some(status) = status else {
        out.push_str(&" ".repeat(cols));
        return;
    };

    let color = match status.kind {
        StatusKind::Info => &theme.colors.info_fg,
        StatusKind::Error => &theme.colors.error_fg,
        StatusKind::DataLoss => {
            out.push_str(Theme::bold());
            &theme.colors.error_fg
        }
    };
    push_line(out, &format!(" {}", status.text), color, cols);
}
