//! Terminal entry point.
//!
//! Thin integration layer between the Hackpad library and the terminal. It
//! owns the raw-mode session, reads crossterm events and writes the frames the
//! library renders.
//!
//! # Lifecycle
//!
//! 1. **Load**: Resolve `~/.hackpad`, read `config.toml`, open the vault
//! 2. **Trace**: Start span export (best effort)
//! 3. **Enter**: Raw mode and alternate screen, draw the welcome screen
//! 4. **Update**: Map each key press to an intent and apply it
//! 5. **Render**: Redraw when the state changed or the terminal was resized
//! 6. **Exit**: `Ctrl+q` restores the terminal
//!
//! # Keybindings
//!
//! - `Ctrl+n`: New note
//! - `Ctrl+l`: List notes
//! - `Ctrl+s`: Save the open note
//! - `Ctrl+q`: Quit
//! - `Esc`: Back to the welcome screen
//! - `Enter`: Confirm name / open selected note / newline
//! - Arrows, `Home`, `End`, `Backspace`, `Delete`: Navigation and editing

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};
use std::process::ExitCode;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

use hackpad::input::map_key_event;
use hackpad::observability::init_tracing;
use hackpad::{handle_intent, infrastructure, initialize, ui, AppState, Config, HackpadError, Outcome, VaultStore};

/// Raw-mode alternate-screen session, restored on drop.
struct TerminalSession;

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), crossterm::cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hackpad: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), HackpadError> {
    let home = infrastructure::home_dir()?;
    let config = Config::load(&home)?;
    let store = VaultStore::open(config.vault_root.clone())?;

    init_tracing(&config);
    let span = tracing::debug_span!("app_load");
    let load_guard = span.entered();
    tracing::debug!(vault = %store.root().display(), "vault opened");
    let mut state = initialize(&config);
    drop(load_guard);

    let _session = TerminalSession::enter()?;
    event_loop(&mut state, &store)?;

    tracing::debug!("hackpad exiting");
    Ok(())
}

fn event_loop(state: &mut AppState, store: &VaultStore) -> io::Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    draw(state, rows, cols)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                let Some(intent) = map_key_event(&key) else {
                    continue;
                };
                match handle_intent(state, store, &intent) {
                    Outcome::Quit => return Ok(()),
                    outcome if outcome.should_render() => draw(state, rows, cols)?,
                    _ => {}
                }
            }
            Event::Resize(new_cols, new_rows) => {
                cols = new_cols;
                rows = new_rows;
                draw(state, rows, cols)?;
            }
            _ => {}
        }
    }
}

fn draw(state: &AppState, rows: u16, cols: u16) -> io::Result<()> {
    let frame = ui::render(state, usize::from(rows), usize::from(cols));
    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}
