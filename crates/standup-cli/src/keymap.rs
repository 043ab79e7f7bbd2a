//! Key bindings for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    Quit,
}

/// A key bound to an action, with the footer description.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub key: char,
    pub action: Action,
    pub description: &'static str,
}

/// Bindings in footer order.
pub const BINDINGS: &[Binding] = &[
    Binding {
        key: 'a',
        action: Action::Previous,
        description: "Previous Speaker",
    },
    Binding {
        key: 'd',
        action: Action::Next,
        description: "Next Speaker",
    },
    Binding {
        key: 'q',
        action: Action::Quit,
        description: "Quit",
    },
];

/// Maps a key event to its action.
///
/// Only presses count; `Esc` and `Ctrl-C` always quit.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) => BINDINGS
            .iter()
            .find(|b| b.key == c.to_ascii_lowercase())
            .map(|b| b.action),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for(&press(KeyCode::Char('d'))), Some(Action::Next));
        assert_eq!(action_for(&press(KeyCode::Char('a'))), Some(Action::Previous));
        assert_eq!(action_for(&press(KeyCode::Char('D'))), Some(Action::Next));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_and_release_ignored() {
        assert_eq!(action_for(&press(KeyCode::Char('c'))), None);
        assert_eq!(action_for(&press(KeyCode::Enter)), None);

        let release = KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for(&release), None);
    }
}
