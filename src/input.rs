use crate::types::Key;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::{io, time::Duration};

/// Source of at most one keystroke per frame.
pub trait Input {
    /// `Ok(None)` means nothing was pressed this frame.
    fn get_letter(&mut self) -> io::Result<Option<Key>>;
}

/// Reads the real keyboard through crossterm without blocking the frame.
#[derive(Debug, Default)]
pub struct Keyboard;

impl Input for Keyboard {
    fn get_letter(&mut self) -> io::Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        Ok(match event::read()? {
            Event::Key(key) => translate(key),
            _ => None,
        })
    }
}

/// Maps a crossterm key event onto the game's keys. Control characters and
/// keys the game has no use for are dropped.
fn translate(key: KeyEvent) -> Option<Key> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => Some(Key::Quit),
        (KeyCode::Char(c), modifiers)
            if !c.is_control() && (modifiers - KeyModifiers::SHIFT).is_empty() =>
        {
            Some(Key::Char(c))
        }
        (KeyCode::Backspace, _) => Some(Key::Backspace),
        (KeyCode::Enter, _) => Some(Key::Enter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent { code, modifiers }
    }

    #[test]
    fn printable_chars_pass_through() {
        assert_eq!(
            translate(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Key::Char('a'))
        );
        assert_eq!(
            translate(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Char('A'))
        );
        assert_eq!(
            translate(key(KeyCode::Char('*'), KeyModifiers::SHIFT)),
            Some(Key::Char('*'))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Quit));
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Quit)
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            translate(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Key::Backspace)
        );
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
    }

    #[test]
    fn chords_and_control_chars_are_dropped() {
        assert_eq!(translate(key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
        assert_eq!(translate(key(KeyCode::Char('\u{7}'), KeyModifiers::NONE)), None);
        assert_eq!(translate(key(KeyCode::Tab, KeyModifiers::NONE)), None);
        assert_eq!(translate(key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }
}
