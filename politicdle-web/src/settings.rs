//! Settings persistence over browser `localStorage`.

use gloo::storage::{LocalStorage, Storage};
use politicdle_game::SettingsData;

const SETTINGS_KEY: &str = "politicdle.settings";

/// Saved preferences, or defaults when nothing (or garbage) is stored.
#[must_use]
pub fn load_settings() -> SettingsData {
    LocalStorage::get(SETTINGS_KEY).unwrap_or_default()
}

/// Persist preferences; a failed write keeps the in-memory settings live.
pub fn save_settings(settings: &SettingsData) {
    if let Err(err) = LocalStorage::set(SETTINGS_KEY, settings) {
        log::warn!("failed to persist settings: {err:?}");
    }
}
