//! Error types for Hackpad.
//!
//! Two error families exist, split by whether the process can keep running:
//!
//! - [`VaultError`]: recoverable failures of vault operations (create, open, save).
//!   The state machine aborts the transition, keeps the current mode and shows
//!   the error as a status message.
//! - [`HackpadError`]: fatal failures of the application shell (home directory,
//!   vault directory, configuration, terminal). `main` reports them and exits
//!   with status 1.
//!
//! Both are implemented with `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failure of a vault operation.
///
/// # Examples
///
/// ```
/// use hackpad::VaultError;
/// use std::path::PathBuf;
///
/// let err = VaultError::AlreadyExists { path: PathBuf::from("/vault/todo.md") };
/// assert_eq!(err.to_string(), "note already exists: /vault/todo.md");
/// ```
#[derive(Debug, Error)]
pub enum VaultError {
    /// The requested note does not exist in the vault (or is a directory).
    #[error("note not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A note with the requested name already exists.
    ///
    /// Creation never overwrites an existing file.
    #[error("note already exists: {}", path.display())]
    AlreadyExists {
        /// Path of the existing note.
        path: PathBuf,
    },

    /// The note name cannot be mapped to a file directly under the vault root.
    #[error("invalid note name: {name:?}")]
    InvalidName {
        /// Name as typed by the user.
        name: String,
    },

    /// Filesystem operation failed before any on-disk content was changed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Saving failed after the note was truncated.
    ///
    /// The file on disk may be empty or partially written. The in-memory
    /// content is still intact and the save can be retried.
    #[error("save failed after truncating {}; the note on disk may be empty or incomplete: {source}", path.display())]
    Truncated {
        /// Path of the damaged note.
        path: PathBuf,
        /// Underlying error from the seek, write or flush step.
        #[source]
        source: std::io::Error,
    },
}

impl VaultError {
    /// Wraps an I/O error for `path`.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the failure may have destroyed on-disk content.
    #[must_use]
    pub const fn is_data_loss(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Fatal failure of the application shell.
#[derive(Debug, Error)]
pub enum HackpadError {
    /// The user's home directory could not be determined.
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    /// The vault directory could not be created.
    #[error("could not create vault directory {}: {source}", path.display())]
    VaultDirectory {
        /// Vault root that was being created.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but cannot be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, input or output failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A specialized `Result` type for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
