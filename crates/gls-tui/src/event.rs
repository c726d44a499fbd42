//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    /// Two-stage confirm: select, then descend.
    Confirm,

    // Focus
    NextPane,
    PrevPane,

    // UI toggles
    ToggleHelp,
    ToggleTheme,
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,

            (KeyCode::Enter, _) => KeyAction::Confirm,

            (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::NextPane,
            (KeyCode::BackTab, _) => KeyAction::PrevPane,

            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move cursor" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "PgUp/PgDn", description: "Page up/down" },
                KeyBinding { keys: "Enter", description: "Preview entry" },
                KeyBinding { keys: "Enter ×2", description: "Open directory" },
                KeyBinding { keys: "Tab/S-Tab", description: "Switch pane" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
            ],
        },
        HelpSection {
            title: "Application",
            bindings: vec![
                KeyBinding { keys: "q", description: "Quit" },
                KeyBinding { keys: "Ctrl-c", description: "Quit from anywhere" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_required_bindings() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Down, KeyModifiers::NONE)),
            KeyAction::MoveDown
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Up, KeyModifiers::NONE)),
            KeyAction::MoveUp
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            KeyAction::Confirm
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE)),
            KeyAction::None
        );
        // Plain 'c' is not quit
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            KeyAction::None
        );
    }

    #[test]
    fn test_help_sections_not_empty() {
        let sections = get_help_sections();
        assert!(!sections.is_empty());
        assert!(sections.iter().all(|s| !s.bindings.is_empty()));
    }
}
