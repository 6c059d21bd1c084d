//! Keyboard keys and pressed-key snapshots
//!
//! Keys are named after DOM `KeyboardEvent.code` values ("KeyA",
//! "ArrowLeft"), which is also how they appear in settings files.

use serde::{Deserialize, Serialize};

/// Keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code` name. The serde variant names are
    /// the DOM codes, so settings files and key events share one table.
    pub fn from_code(code: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(code.to_owned())).ok()
    }

    #[inline]
    fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Which keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: u32,
}

impl KeyState {
    pub fn press(&mut self, key: Key) {
        self.pressed |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.pressed &= !key.bit();
    }

    /// Record a press or release
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed & key.bit() != 0
    }

    /// Release everything (focus lost)
    pub fn clear(&mut self) {
        self.pressed = 0;
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut state = Self::default();
        for key in iter {
            state.press(key);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_matches_serde_names() {
        for key in [Key::KeyA, Key::KeyZ, Key::ArrowLeft, Key::ArrowDown] {
            let code = serde_json::to_value(key).unwrap();
            assert_eq!(Key::from_code(code.as_str().unwrap()), Some(key));
        }
        assert_eq!(Key::from_code("KeyJ"), Some(Key::KeyJ));
        assert_eq!(Key::from_code("Space"), None);
        assert_eq!(Key::from_code("keya"), None);
    }

    #[test]
    fn test_press_release() {
        let mut keys = KeyState::default();
        keys.press(Key::KeyA);
        keys.press(Key::ArrowDown);
        assert!(keys.is_pressed(Key::KeyA));
        assert!(keys.is_pressed(Key::ArrowDown));
        assert!(!keys.is_pressed(Key::KeyD));

        keys.set(Key::KeyA, false);
        assert!(!keys.is_pressed(Key::KeyA));
        keys.clear();
        assert_eq!(keys, KeyState::default());
    }

    #[test]
    fn test_serde_names_match_codes() {
        let json = serde_json::to_string(&Key::ArrowLeft).unwrap();
        assert_eq!(json, "\"ArrowLeft\"");
        let key: Key = serde_json::from_str("\"KeyJ\"").unwrap();
        assert_eq!(key, Key::KeyJ);
    }
}
