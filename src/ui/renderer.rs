//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Compose components into one frame string
//!
//! The frame clears the screen, draws every component at absolute positions,
//! and leaves the terminal cursor where text would be typed (or hidden when
//! nothing takes text input). Writing it out is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use hackpad::app::AppState;
//! use hackpad::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("Welcome to Hackpad!"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

const CLEAR_SCREEN: &str = "\u{1b}[2J";
const HIDE_CURSOR: &str = "\u{1b}[?25l";
const SHOW_CURSOR: &str = "\u{1b}[?25h";

/// Renders `state` for a terminal of `rows` x `cols`.
///
/// Pure: the same state and viewport always produce the same frame.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model into a frame.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    out.push_str(HIDE_CURSOR);
    out.push_str(CLEAR_SCREEN);

    if let Some((row, col)) = components::render_layout(&mut out, vm, theme, rows, cols) {
        position_cursor(&mut out, row, col);
        out.push_str(SHOW_CURSOR);
    }

    out
}
