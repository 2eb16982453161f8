//! Keyboard bindings configuration.

use crate::model::{KeyAction, LayerKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup, so press/repeat
    /// kinds and keyboard state flags never prevent a match.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        // Some terminals report 'G' without the shift modifier
        keys.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Arrow and navigation keys
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Layer headers
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextLayer);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevLayer);
        keys.bind(KeyCode::BackTab, KeyModifiers::NONE, KeyAction::PrevLayer);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::ToggleFocused);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleFocused);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::CollapseOpen);
        for key in LayerKey::ALL {
            let digit = char::from(b'0' + key.number() as u8);
            keys.bind(
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                KeyAction::ToggleLayer(key),
            );
        }

        // Application controls
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn digits_toggle_layers_in_display_order() {
        let bindings = KeyBindings::default();
        let expected = [
            ('1', LayerKey::Presentation),
            ('2', LayerKey::Application),
            ('3', LayerKey::Data),
        ];
        for (digit, layer) in expected {
            assert_eq!(
                bindings.get(key(KeyCode::Char(digit), KeyModifiers::NONE)),
                Some(KeyAction::ToggleLayer(layer)),
                "'{digit}' should toggle {layer}"
            );
        }
    }

    #[test]
    fn digits_past_the_last_layer_are_unbound() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('4'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn enter_and_space_toggle_focused_layer() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(KeyAction::ToggleFocused)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(KeyAction::ToggleFocused)
        );
    }

    #[test]
    fn tab_and_backtab_move_cursor() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(KeyAction::NextLayer)
        );
        assert_eq!(
            bindings.get(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(KeyAction::PrevLayer)
        );
    }

    #[test]
    fn quit_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn lookup_ignores_event_kind_and_state() {
        let bindings = KeyBindings::default();
        let repeat = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::CAPS_LOCK,
        };
        assert_eq!(bindings.get(repeat), Some(KeyAction::ScrollDown));
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }
}
