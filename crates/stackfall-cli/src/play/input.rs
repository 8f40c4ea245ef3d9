use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stackfall_engine::Intent;

use crate::view::KeyBinding;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, derive_more::From)]
pub enum Action {
    Play(Intent),
    Start,
    Quit,
}

pub const KEY_BINDINGS: &[KeyBinding<'static>] = &[
    (&["a", "←"], "Left"),
    (&["d", "→"], "Right"),
    (&["w", "↑"], "Rotate ↺"),
    (&["s"], "Rotate ↻"),
    (&["l", "↓"], "Drop"),
    (&["q", "Esc"], "Quit"),
];

/// Maps a key to an action. Unmapped keys return `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('a') | KeyCode::Left => Intent::MoveLeft.into(),
        KeyCode::Char('d') | KeyCode::Right => Intent::MoveRight.into(),
        KeyCode::Char('w') | KeyCode::Up => Intent::RotateCcw.into(),
        KeyCode::Char('s') => Intent::RotateCw.into(),
        KeyCode::Char('l') | KeyCode::Down => Intent::SoftDrop.into(),
        KeyCode::Char(' ') => Action::Start,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letter_keys() {
        let cases = [
            ('a', Intent::MoveLeft),
            ('d', Intent::MoveRight),
            ('w', Intent::RotateCcw),
            ('s', Intent::RotateCw),
            ('l', Intent::SoftDrop),
        ];
        for (c, intent) in cases {
            assert_eq!(
                action_for_key(key(KeyCode::Char(c))),
                Some(Action::Play(intent))
            );
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            action_for_key(key(KeyCode::Left)),
            Some(Action::Play(Intent::MoveLeft))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Right)),
            Some(Action::Play(Intent::MoveRight))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Up)),
            Some(Action::Play(Intent::RotateCcw))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Down)),
            Some(Action::Play(Intent::SoftDrop))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char(' '))), Some(Action::Start));
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        for code in [KeyCode::Char('x'), KeyCode::Char('A'), KeyCode::Enter, KeyCode::Tab] {
            assert_eq!(action_for_key(key(code)), None);
        }
    }
}
