//! Platform-agnostic keyboard events.
//!
//! The host UI maps its native key input to these variants. The session
//! controller never sees raw platform input, so the same state machine runs
//! under any frontend (or none, in tests).

use serde::{Deserialize, Serialize};

/// A single keystroke delivered to the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyEvent {
    /// Printable character typed into the input line.
    Char(char),
    /// Delete the character left of the cursor.
    Backspace,
    /// Submit the current input line.
    Enter,
    /// Request tab-completion on the current input.
    Tab,
    /// Recall the previous history entry.
    Up,
    /// Recall the next history entry.
    Down,
    /// Clear the scrollback buffer, bypassing command execution.
    CtrlL,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_event_carries_payload() {
        if let KeyEvent::Char(c) = KeyEvent::Char('x') {
            assert_eq!(c, 'x');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn variants_are_distinct() {
        assert_ne!(KeyEvent::Up, KeyEvent::Down);
        assert_ne!(KeyEvent::Enter, KeyEvent::Tab);
        assert_ne!(KeyEvent::Backspace, KeyEvent::CtrlL);
    }

    #[test]
    fn serde_roundtrip() {
        let events = [
            KeyEvent::Char('a'),
            KeyEvent::Backspace,
            KeyEvent::Enter,
            KeyEvent::Tab,
            KeyEvent::Up,
            KeyEvent::Down,
            KeyEvent::CtrlL,
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: KeyEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }
}
