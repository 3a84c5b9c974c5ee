//! Key bindings.
//!
//! Maps crossterm key events to [`Intent`]s. The mapping is the same in every
//! mode; what an intent means is decided by
//! [`handle_intent`](crate::app::handle_intent).
//!
//! | Key | Intent |
//! |---|---|
//! | `Ctrl+N` | `NewNote` |
//! | `Ctrl+L` | `ShowList` |
//! | `Ctrl+S` | `Save` |
//! | `Ctrl+Q` | `Quit` |
//! | `Esc` | `Cancel` |
//! | `Enter` | `Confirm` |
//! | arrows | `Navigate` |
//! | `Backspace`/`Delete`/`Home`/`End` | `TextEdit` |
//! | `Tab`, printable characters | `TextEdit::Insert` |

use crate::app::{Direction, Intent, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key event to an intent.
///
/// Returns `None` for unbound keys and for anything but a key press.
///
/// # Example
///
/// ```rust
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use hackpad::app::Intent;
/// use hackpad::input::map_key_event;
///
/// let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
/// assert_eq!(map_key_event(&key), Some(Intent::Save));
/// ```
#[must_use]
pub fn map_key_event(key: &KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Intent::NewNote),
            KeyCode::Char('l') => Some(Intent::ShowList),
            KeyCode::Char('s') => Some(Intent::Save),
            KeyCode::Char('q') => Some(Intent::Quit),
            _ => None,
        };
    }

    Some(match key.code {
        KeyCode::Esc => Intent::Cancel,
        KeyCode::Enter => Intent::Confirm,
        KeyCode::Up => Intent::Navigate(Direction::Up),
        KeyCode::Down => Intent::Navigate(Direction::Down),
        KeyCode::Left => Intent::Navigate(Direction::Left),
        KeyCode::Right => Intent::Navigate(Direction::Right),
        KeyCode::Backspace => Intent::TextEdit(TextEdit::Backspace),
        KeyCode::Delete => Intent::TextEdit(TextEdit::Delete),
        KeyCode::Home => Intent::TextEdit(TextEdit::Home),
        KeyCode::End => Intent::TextEdit(TextEdit::End),
        KeyCode::Tab => Intent::TextEdit(TextEdit::Insert('\t')),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Intent::TextEdit(TextEdit::Insert(c))
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_commands() {
        let cases = [
            ('n', Intent::NewNote),
            ('l', Intent::ShowList),
            ('s', Intent::Save),
            ('q', Intent::Quit),
        ];
        for (c, intent) in cases {
            assert_eq!(map_key_event(&key(KeyCode::Char(c), KeyModifiers::CONTROL)), Some(intent));
        }
        assert_eq!(map_key_event(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn plain_letters_are_text() {
        assert_eq!(
            map_key_event(&key(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Intent::TextEdit(TextEdit::Insert('n')))
        );
        assert_eq!(
            map_key_event(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Intent::TextEdit(TextEdit::Insert('Q')))
        );
        assert_eq!(map_key_event(&key(KeyCode::Char('q'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn enter_escape_and_editing_keys() {
        assert_eq!(map_key_event(&key(KeyCode::Enter, KeyModifiers::NONE)), Some(Intent::Confirm));
        assert_eq!(map_key_event(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Intent::Cancel));
        assert_eq!(
            map_key_event(&key(KeyCode::Up, KeyModifiers::NONE)),
            Some(Intent::Navigate(Direction::Up))
        );
        assert_eq!(
            map_key_event(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Intent::TextEdit(TextEdit::Insert('\t')))
        );
        assert_eq!(map_key_event(&key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = KeyEvent::new_with_kind_and_state(
                KeyCode::Char('a'),
                KeyModifiers::NONE,
                kind,
                KeyEventState::NONE,
            );
            assert_eq!(map_key_event(&event), None);
        }
    }
}
