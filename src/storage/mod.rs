//! Storage layer for note files.
//!
//! # Modules
//!
//! - `backend`: [`NoteStore`] trait driven by the state machine
//! - `document`: Open documents and their file handles
//! - `vault`: Directory-backed [`VaultStore`]

pub mod backend;
pub mod document;
pub mod vault;

pub use backend::{NoteStore, SaveFailure};
pub use document::{ActiveDocument, NoteHandle};
pub use vault::VaultStore;
