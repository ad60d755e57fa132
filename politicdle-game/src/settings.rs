//! Player preferences consumed by the core and persisted by the platform
//! layer.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_DAY_SHIFT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

/// User preferences. Every field is defaulted so archives written by older
/// builds keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    /// Whether the player may preview upcoming days.
    #[serde(default)]
    pub allow_shifting_day: bool,
    #[serde(default)]
    pub shift_day_count: i64,
    #[serde(default)]
    pub no_image_mode: bool,
    #[serde(default)]
    pub rotation_mode: bool,
}

impl SettingsData {
    /// Move the previewed day by `delta`, clamped to the allowed window.
    pub fn shift_day(&mut self, delta: i64) {
        self.shift_day_count = (self.shift_day_count + delta).clamp(0, MAX_DAY_SHIFT);
    }
}
