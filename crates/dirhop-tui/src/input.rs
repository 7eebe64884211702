//! Key decoding: crossterm events to the core's [`Key`] vocabulary.
//!
//! Everything the core does not understand (function keys, Alt chords,
//! key releases) decodes to `None` and is dropped by the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dirhop_core::Key;

/// Decodes one terminal key event.
pub fn decode_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::CtrlC),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Home => Some(Key::Home),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    // --- fixed keys ---

    #[test]
    fn arrows_decode() {
        assert_eq!(decode_key(key(KeyCode::Up)), Some(Key::Up));
        assert_eq!(decode_key(key(KeyCode::Down)), Some(Key::Down));
        assert_eq!(decode_key(key(KeyCode::Left)), Some(Key::Left));
        assert_eq!(decode_key(key(KeyCode::Right)), Some(Key::Right));
    }

    #[test]
    fn enter_tab_home_decode() {
        assert_eq!(decode_key(key(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(decode_key(key(KeyCode::Tab)), Some(Key::Tab));
        assert_eq!(decode_key(key(KeyCode::Home)), Some(Key::Home));
    }

    #[test]
    fn space_is_its_own_key() {
        assert_eq!(decode_key(key(KeyCode::Char(' '))), Some(Key::Space));
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        assert_eq!(
            decode_key(key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::CtrlC)
        );
    }

    // --- characters ---

    #[test]
    fn plain_and_shifted_chars_pass_through() {
        assert_eq!(decode_key(key(KeyCode::Char('q'))), Some(Key::Char('q')));
        assert_eq!(
            decode_key(key_with_mod(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Key::Char('Q'))
        );
        assert_eq!(decode_key(key(KeyCode::Char('.'))), Some(Key::Char('.')));
    }

    #[test]
    fn other_chords_are_dropped() {
        assert_eq!(
            decode_key(key_with_mod(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            decode_key(key_with_mod(KeyCode::Char('q'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn unsupported_keys_are_dropped() {
        assert_eq!(decode_key(key(KeyCode::F(1))), None);
        assert_eq!(decode_key(key(KeyCode::Esc)), None);
        assert_eq!(decode_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn releases_are_dropped() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..key(KeyCode::Down)
        };
        assert_eq!(decode_key(release), None);
    }
}
