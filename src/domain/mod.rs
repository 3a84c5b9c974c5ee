//! Domain layer for Hackpad.
//!
//! Core types shared by the storage, application and UI layers, independent of
//! the terminal backend.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`note`]: Note listing entries

pub mod error;
pub mod note;

pub use error::{HackpadError, Result, VaultError};
pub use note::NoteFile;
