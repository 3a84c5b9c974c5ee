//! Hackpad: a terminal notepad backed by a directory of markdown files.
//!
//! Hackpad keeps notes as plain `<name>.md` files in a per-user vault
//! (`~/.hackpad/vault`). The UI has four modes: a welcome screen, a listing of
//! the vault, a prompt for a new note's name, and an editor for one note.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Loop (main.rs)                            │  ← crossterm events
//! └─────────────────────────────────────────────────────┘
//!          │ input::map_key_event               ▲ ui::render
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Intents and modes                                │
//! │  - handle_intent transitions                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!          │                                   │
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │ Storage Layer           │   │ UI Layer                │
//! │ (storage/)              │   │ (ui/)                   │
//! │ - NoteStore trait       │   │ - Components            │
//! │ - VaultStore            │   │ - Theming               │
//! └─────────────────────────┘   └─────────────────────────┘
//!          │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths under ~/.hackpad (infrastructure/)         │
//! │  - Errors and note entries (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!          │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OTLP JSON span export to ~/.hackpad              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Modes, intents and the transition function
//! - [`domain`]: Error types and note entries
//! - [`infrastructure`]: Home and vault directory resolution
//! - [`input`]: Key bindings
//! - [`storage`]: Vault persistence behind the [`NoteStore`] trait
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Span export
//!
//! # Configuration
//!
//! An optional `~/.hackpad/config.toml`:
//!
//! ```toml
//! theme = "catppuccin-mocha"          # built-in theme name
//! theme_file = "/path/to/theme.toml"  # takes precedence over `theme`
//! trace_level = "debug"               # EnvFilter directive, default "info"
//! ```
//!
//! # Example
//!
//! ```rust
//! use hackpad::{handle_intent, initialize, Config, Intent, ModeKind, VaultStore};
//!
//! let home = tempfile::tempdir()?;
//! let config = Config::load(home.path())?;
//! let store = VaultStore::open(config.vault_root.clone())?;
//! let mut state = initialize(&config);
//!
//! handle_intent(&mut state, &store, &Intent::NewNote);
//! assert_eq!(state.mode().kind(), ModeKind::NamingNote);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod input;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_intent, AppState, Intent, Mode, ModeKind, Outcome};
pub use domain::{HackpadError, NoteFile, Result, VaultError};
pub use storage::{NoteStore, VaultStore};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
///
/// Locations are derived from the home directory; presentation and tracing
/// options come from `~/.hackpad/config.toml` when it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the notes (`<home>/.hackpad/vault`).
    pub vault_root: PathBuf,

    /// Directory for the config file and trace export (`<home>/.hackpad`).
    pub data_dir: PathBuf,

    /// Built-in theme name to use.
    ///
    /// Options: `hackpad`, `catppuccin-mocha`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    theme: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Default configuration for `home`, without reading any file.
    #[must_use]
    pub fn resolve(home: &Path) -> Self {
        Self {
            vault_root: infrastructure::vault_dir(home),
            data_dir: infrastructure::data_dir(home),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }

    /// Resolves the configuration for `home`, applying `config.toml` if present.
    ///
    /// # Errors
    ///
    /// Returns [`HackpadError::Config`] if the file exists but cannot be read
    /// or parsed.
    pub fn load(home: &Path) -> std::result::Result<Self, HackpadError> {
        let mut config = Self::resolve(home);
        let path = config.data_dir.join(CONFIG_FILE_NAME);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(config),
            Err(e) => {
                return Err(HackpadError::Config(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        config.apply_toml(&contents).map_err(|e| {
            HackpadError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    /// Overrides options with the values set in a `config.toml` document.
    ///
    /// # Errors
    ///
    /// Returns the parse error for invalid TOML, wrong value types or unknown
    /// keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hackpad::Config;
    /// use std::path::Path;
    ///
    /// let mut config = Config::resolve(Path::new("/home/ada"));
    /// config.apply_toml("theme = \"catppuccin-mocha\"")?;
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
    /// # Ok::<(), toml::de::Error>(())
    /// ```
    pub fn apply_toml(&mut self, contents: &str) -> std::result::Result<(), toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;

        if file.theme.is_some() {
            self.theme_name = file.theme;
        }
        if file.theme_file.is_some() {
            self.theme_file = file.theme_file;
        }
        if file.trace_level.is_some() {
            self.trace_level = file.trace_level;
        }
        Ok(())
    }
}

/// Creates the idle application state with the configured theme.
///
/// Theme resolution: `theme_file`, then `theme_name`, then the default. A
/// theme that fails to load falls back to the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing hackpad");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
