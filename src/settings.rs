//! Player settings and preferences
//!
//! Kept apart from [`Tunables`](crate::Tunables): tunables shape the game,
//! settings only change how it is presented.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Display ===
    /// Start in fullscreen (the host owns the window)
    pub fullscreen: bool,
    /// Speed/score text
    pub show_hud: bool,
    /// Hit circle and pinata bounds outlines
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            fullscreen: false,
            show_hud: true,
            show_debug: false,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file for the native binary
    pub const ENV_VAR: &'static str = "PINATA_SETTINGS";

    /// Parse settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(|mut settings| {
            settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
            settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
            settings
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(json) = std::fs::read_to_string(path) else {
            log::warn!("Could not read settings {} - using defaults", path.display());
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the file named by [`ENV_VAR`](Self::ENV_VAR), if set
    pub fn from_env() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
