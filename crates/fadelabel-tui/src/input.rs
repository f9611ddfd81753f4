use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SpeedUp,
    SpeedDown,
    ToggleScrolling, // 's': selected label
    ToggleFadeIn,    // 'f': selected label
    ResetLabels,
    ToggleDim,
    AppendLine, // 'a': add a line to the selected label
    NextTheme,
    SelectNext,
    SelectPrev,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scroll speed, '+' arrives with SHIFT on most layouts
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::SpeedUp,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::SpeedDown,

        // Label behaviour
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ToggleScrolling,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::ToggleFadeIn,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ResetLabels,
        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::ToggleDim,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::AppendLine,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::NextTheme,

        // Selection
        (KeyCode::Tab, KeyModifiers::NONE) => Action::SelectNext,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::SelectNext,
        (KeyCode::Down, KeyModifiers::NONE) => Action::SelectNext,
        (KeyCode::BackTab, _) => Action::SelectPrev,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::SelectPrev,
        (KeyCode::Up, KeyModifiers::NONE) => Action::SelectPrev,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Action::SpeedUp
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('='), KeyModifiers::NONE)),
            Action::SpeedUp
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('-'), KeyModifiers::NONE)),
            Action::SpeedDown
        );
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Tab, KeyModifiers::NONE)), Action::SelectNext);
        assert_eq!(
            handle_key_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Action::SelectPrev
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Action::None
        );
    }
}
