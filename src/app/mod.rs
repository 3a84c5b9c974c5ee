//! Application layer: modes, intents and the transition function.
//!
//! This module sits between the terminal loop (`main.rs`) and the
//! storage/ui layers. Data flows one way:
//!
//! ```text
//! Key Event → Intent → handle_intent → Mode transition (+ vault call) → render
//! ```
//!
//! # Modules
//!
//! - [`intents`]: Abstract user actions, independent of key bindings
//! - [`modes`]: The tagged [`Mode`] enum and its per-mode data
//! - [`editor`]: In-memory editing of the open note
//! - [`state`]: Central application state and view model computation
//! - [`handler`]: Intent processing and mode transitions
//!
//! # Example
//!
//! ```rust
//! use hackpad::app::{handle_intent, AppState, Intent, ModeKind};
//! use hackpad::storage::VaultStore;
//! use hackpad::ui::Theme;
//!
//! let dir = tempfile::tempdir()?;
//! let store = VaultStore::open(dir.path().join("vault"))?;
//! let mut state = AppState::new(Theme::default());
//!
//! handle_intent(&mut state, &store, &Intent::ShowList);
//! assert_eq!(state.mode().kind(), ModeKind::Listing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod editor;
pub mod handler;
pub mod intents;
pub mod modes;
pub mod state;

pub use editor::{Editor, CONTENT_CHAR_LIMIT};
pub use handler::{handle_intent, Outcome};
pub use intents::{Direction, Intent, TextEdit};
pub use modes::{Mode, ModeKind, NoteList, PendingName, NAME_CHAR_LIMIT};
pub use state::{AppState, StatusKind, StatusMessage};
