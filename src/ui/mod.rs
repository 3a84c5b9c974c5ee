//! User interface rendering layer with component-based architecture.
//!
//! Transforms application state into ANSI-styled frames through composable
//! rendering components. The UI never touches the terminal itself; `main.rs`
//! writes the frames out.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → frame String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and width handling
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    Body, DisplayItem, EditorView, EmptyState, FooterInfo, HeaderInfo, InputBox, NoteTable,
    StatusLine, UIViewModel,
};
