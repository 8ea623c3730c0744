//! Key bindings for face turns and cube rotations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Which key turns which face, and which keys rotate the whole cube.
///
/// Keys are layout-independent key codes (`"KeyQ"`, `"ArrowUp"`), so the
/// default left-hand cluster stays in place on non-QWERTY layouts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Face keys only select a face; the arrow keys pressed while one is
    /// held pick the turn direction.
    pub arrow_turns: bool,
    /// Puzzle action → key code (e.g. `TurnFront` → `"KeyQ"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Key code → action, derived from `bindings`.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        // Q W E over A S D: front, up, back over left, down, right.
        let bindings = HashMap::from([
            (KeyAction::TurnFront, "KeyQ".into()),
            (KeyAction::TurnUp, "KeyW".into()),
            (KeyAction::TurnBack, "KeyE".into()),
            (KeyAction::TurnLeft, "KeyA".into()),
            (KeyAction::TurnDown, "KeyS".into()),
            (KeyAction::TurnRight, "KeyD".into()),
            (KeyAction::RotateX, "KeyZ".into()),
            (KeyAction::RotateY, "KeyX".into()),
            (KeyAction::RotateZ, "KeyC".into()),
        ]);

        let mut opts = Self {
            arrow_turns: false,
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Re-derive the key lookup after `bindings` changed.
    ///
    /// Two actions bound to one key leave only one of them reachable.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            if let Some(other) = self.key_to_action.insert(key.clone(), *action) {
                log::warn!("{key} bound to both {other:?} and {action:?}");
            }
        }
    }

    /// Action bound to a key code.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_moves_the_action() {
        let mut opts = KeybindingOptions::default();
        let _ = opts.bindings.insert(KeyAction::TurnFront, "KeyF".into());
        opts.rebuild_reverse_map();
        assert_eq!(opts.lookup("KeyF"), Some(KeyAction::TurnFront));
        assert_eq!(opts.lookup("KeyQ"), None);
        assert_eq!(opts.lookup("KeyD"), Some(KeyAction::TurnRight));
    }
}
