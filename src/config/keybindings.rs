//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides vim-style defaults alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any existing binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }

    /// Keys bound to `action`, for the help overlay. Sorted for stable output.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| describe(*key))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Strip event kind/state so presses and repeats hit the same entry.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

fn describe(key: KeyEvent) -> String {
    let code = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{code}")
    } else {
        code
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        bindings.bind(plain(KeyCode::Char('h')), KeyAction::FlickBackward);
        bindings.bind(plain(KeyCode::Left), KeyAction::FlickBackward);
        bindings.bind(plain(KeyCode::Char('l')), KeyAction::FlickForward);
        bindings.bind(plain(KeyCode::Right), KeyAction::FlickForward);

        bindings.bind(plain(KeyCode::Char('[')), KeyAction::StepBackward);
        bindings.bind(plain(KeyCode::Char(']')), KeyAction::StepForward);

        bindings.bind(plain(KeyCode::Enter), KeyAction::Confirm);
        bindings.bind(plain(KeyCode::Char('?')), KeyAction::Help);
        bindings.bind(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            KeyAction::Help,
        );

        bindings.bind(plain(KeyCode::Char('q')), KeyAction::Quit);
        bindings.bind(plain(KeyCode::Esc), KeyAction::Quit);
        bindings.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        bindings
    }
}
