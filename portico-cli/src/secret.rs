//! Password entry without echo.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// What a key press did to the line being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Continue,
    Done,
    Cancel,
}

fn apply_key(line: &mut String, key: KeyEvent) -> Key {
    if key.kind != KeyEventKind::Press {
        return Key::Continue;
    }
    match key.code {
        KeyCode::Enter => Key::Done,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Cancel,
        KeyCode::Char(c) => {
            line.push(c);
            Key::Continue
        }
        KeyCode::Backspace => {
            line.pop();
            Key::Continue
        }
        _ => Key::Continue,
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Read one line from the terminal with echo off.
///
/// Blocks; run it on a blocking thread. Returns `None` on Esc, Ctrl-C or
/// Ctrl-D.
pub fn read_hidden_line() -> io::Result<Option<String>> {
    let _raw = RawMode::enable()?;
    let mut line = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match apply_key(&mut line, key) {
            Key::Continue => {}
            Key::Done => return Ok(Some(line)),
            Key::Cancel => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut line = String::new();
        for c in "letmex".chars() {
            assert_eq!(apply_key(&mut line, press(KeyCode::Char(c))), Key::Continue);
        }
        apply_key(&mut line, press(KeyCode::Backspace));
        apply_key(&mut line, press(KeyCode::Char('i')));
        apply_key(&mut line, press(KeyCode::Char('n')));

        assert_eq!(apply_key(&mut line, press(KeyCode::Enter)), Key::Done);
        assert_eq!(line, "letmein");
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let mut line = String::from("abc");
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(apply_key(&mut line, key), Key::Cancel);
        assert_eq!(line, "abc");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut line = String::new();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(apply_key(&mut line, key), Key::Continue);
        assert!(line.is_empty());
    }
}
