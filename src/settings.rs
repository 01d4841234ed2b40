//! Presentation settings
//!
//! Colors, HUD toggles and key bindings. None of this reaches the
//! simulation; the renderer and the platform layer read it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("settings JSON is malformed")]
pub struct SettingsError {
    #[from]
    source: serde_json::Error,
}

/// CSS colors for every drawn primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub center_line: String,
    pub player: String,
    pub opponent: String,
    pub ball: String,
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#000".to_string(),
            center_line: "#fff2".to_string(),
            player: "#0ff".to_string(),
            opponent: "#ff0".to_string(),
            ball: "#fff".to_string(),
            text: "#fff".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: Palette,

    // === Board ===
    /// Dashed line down the middle of the board
    pub center_line: bool,

    // === HUD ===
    pub show_scores: bool,
    pub show_level: bool,
    /// CSS font for HUD text
    pub hud_font: String,

    // === Controls ===
    /// `KeyboardEvent.key` values that toggle pause
    pub pause_keys: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),

            center_line: true,

            show_scores: true,
            show_level: true,
            hud_font: "bold 40px Arial".to_string(),

            pause_keys: vec!["p".to_string(), "P".to_string(), "Escape".to_string()],
        }
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `key` is bound to pause
    pub fn is_pause_key(&self, key: &str) -> bool {
        self.pause_keys.iter().any(|k| k == key)
    }
}
