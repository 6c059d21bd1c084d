//! Game settings and preferences
//!
//! Natively read from a JSON file, on the web from LocalStorage. Missing
//! fields take their defaults; an unreadable file falls back to defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform::{Key, KeyState};
use crate::sim::TickInput;

/// Who moves the top paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaddleTwoControl {
    /// Keyboard, with the computer taking over while its keys are idle
    #[default]
    Keyboard,
    /// Computer only; paddle two's keys are ignored
    Computer,
}

impl PaddleTwoControl {
    pub fn is_human(&self) -> bool {
        matches!(self, PaddleTwoControl::Keyboard)
    }
}

/// Left/right key pair for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaddleKeys {
    pub left: Key,
    pub right: Key,
}

/// Key assignments for both paddles. Any key left out of a settings file
/// keeps its default, so `{"paddle_one": {"left": "KeyJ"}}` only rebinds one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BindingsFile")]
pub struct KeyBindings {
    /// Bottom paddle
    pub paddle_one: PaddleKeys,
    /// Top paddle
    pub paddle_two: PaddleKeys,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_one: PaddleKeys {
                left: Key::KeyA,
                right: Key::KeyD,
            },
            paddle_two: PaddleKeys {
                left: Key::ArrowLeft,
                right: Key::ArrowRight,
            },
        }
    }
}

/// `KeyBindings` as written in a settings file, every key optional
#[derive(Deserialize, Default)]
#[serde(default)]
struct BindingsFile {
    paddle_one: PaddleKeysFile,
    paddle_two: PaddleKeysFile,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PaddleKeysFile {
    left: Option<Key>,
    right: Option<Key>,
}

impl PaddleKeysFile {
    fn or(self, fallback: PaddleKeys) -> PaddleKeys {
        PaddleKeys {
            left: self.left.unwrap_or(fallback.left),
            right: self.right.unwrap_or(fallback.right),
        }
    }
}

impl From<BindingsFile> for KeyBindings {
    fn from(file: BindingsFile) -> Self {
        let defaults = Self::default();
        Self {
            paddle_one: file.paddle_one.or(defaults.paddle_one),
            paddle_two: file.paddle_two.or(defaults.paddle_two),
        }
    }
}

impl KeyBindings {
    /// Resolve held keys into this tick's paddle input
    pub fn resolve(&self, keys: &KeyState) -> TickInput {
        TickInput {
            p1_left: keys.is_pressed(self.paddle_one.left),
            p1_right: keys.is_pressed(self.paddle_one.right),
            p2_left: keys.is_pressed(self.paddle_two.left),
            p2_right: keys.is_pressed(self.paddle_two.right),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bindings: KeyBindings,
    pub paddle_two: PaddleTwoControl,
    /// Wait for vertical sync when presenting. The game has no frame limiter,
    /// so this also sets the game speed.
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            paddle_two: PaddleTwoControl::Keyboard,
            vsync: true,
        }
    }
}

/// Why a settings file could not be used
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read settings: {e}"),
            Self::Parse(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "break-bouncer.json";

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "break_bouncer_settings";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a file, or `DEFAULT_FILE` if present (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&Path>) -> Self {
        let default_path = Path::new(Self::DEFAULT_FILE);
        let path = match path {
            Some(path) => path,
            None if default_path.exists() => default_path,
            None => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("{}, using defaults", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
