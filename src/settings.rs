//! Player preferences
//!
//! Persisted separately from the leaderboard through the same storage seam.
//! The name entered on a high score is remembered here for the next run.

use serde::{Deserialize, Serialize};

use crate::highscores::{DEFAULT_PLAYER_NAME, sanitize_name};
use crate::persistence::Storage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Name prefilled on the high-score entry screen
    pub player_name: String,
    /// Mute all audio output
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
        }
    }
}

impl Settings {
    const STORAGE_KEY: &'static str = "star_guardian_settings";

    /// Remember the name the player last submitted.
    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = sanitize_name(name);
    }

    /// Load from storage; defaults on absence or corruption.
    pub fn load(storage: &mut dyn Storage) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => return settings,
                Err(err) => log::warn!("settings blob unreadable ({}), using defaults", err),
            }
        }
        Self::default()
    }

    /// Persist; failure is logged and otherwise ignored.
    pub fn save(&self, storage: &mut dyn Storage) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if storage.set(Self::STORAGE_KEY, &json) {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to encode settings: {}", err),
        }
    }
}
